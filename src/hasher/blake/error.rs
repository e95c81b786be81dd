use crate::pool;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Hashing not finished")]
    NotFinished,
}

impl From<E> for pool::E {
    fn from(val: E) -> Self {
        pool::E::Hasher(val.to_string())
    }
}
