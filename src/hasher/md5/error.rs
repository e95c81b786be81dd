use crate::pool;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Hashing not finished")]
    NotFinished,
    #[error("Hashing already finished")]
    AlreadyFinished,
}

impl From<E> for pool::E {
    fn from(val: E) -> Self {
        pool::E::Hasher(val.to_string())
    }
}
