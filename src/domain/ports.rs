use crate::domain::model::{BearingGeometry, ValidationPolicy};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn geometry(&self) -> Result<BearingGeometry>;
    fn validation_policy(&self) -> ValidationPolicy;
    fn designation(&self) -> Option<&str>;
    fn include_notes(&self) -> bool;
    fn export_file(&self) -> Option<&str>;
}
