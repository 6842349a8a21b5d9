use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("product #{index} does not have the expected format")]
    MalformedRecord { index: usize },
    #[error("price of product #{index} is outside the supported range")]
    PriceOutOfRange { index: usize },
    #[error("could not build the price catalog, no product has both title and price")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, Error>;
