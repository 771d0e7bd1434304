
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Axis index {index:?} is out of range, expected 0, 1 or 2")]
    AxisIndexOutOfRange {
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, crate::Error>;
