use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    ReportLogic::members(cfg)
}
