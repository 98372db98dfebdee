use core::fmt;

use crate::entities::PostId;

macro_rules! usecase {
    ($n:ident : { $( $i:tt )* } => { $( $o:tt )* }) => {
        pub mod $n {
            #[allow(unused_imports)]
            use crate::entities;

            #[::async_trait::async_trait]
            pub trait Usecase {
                async fn handle(&self, data: Input) -> ::anyhow::Result<Output>;
            }

            #[derive(Debug, Clone)]
            pub struct Input { $( $i )* }

            #[derive(Debug, Clone)]
            pub struct Output { $( $o )* }
        }
    };
}

pub mod post;

/// Failures a caller can act on; anything else is internal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    NotFound(PostId),
    Invalid(&'static str),
}

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostError::NotFound(id) => write!(f, "cannot find post: {}", id),
            PostError::Invalid(reason) => write!(f, "invalid request: {}", reason),
        }
    }
}

impl ::std::error::Error for PostError {}
