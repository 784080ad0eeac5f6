//! # Hermes Core
//!
//! Value types shared by the Hermes configuration store.
//!
//! Every setting in the store holds exactly one [`Value`]. The variant of the
//! value is its [`Kind`], so a slot can never carry a payload that disagrees
//! with its type tag:
//!
//! | Kind | Payload |
//! |---|---|
//! | `Address` | `Option<Address>` |
//! | `Bool` | `bool` |
//! | `Long` | `i64` |
//! | `Number` | `i16` |
//! | `Quad` | [`Quad`] |
//! | `Regex` | `Option<ConfigRegex>` |
//! | `StringList` | `Option<StringList>` |
//! | `String` | `Option<String>` |
//!
//! Reference kinds may be empty (`None`), which is how an unset mailbox, an
//! empty pattern or an empty string is represented.
//!
//! # Example
//!
//! ```
//! use hermes_core::{Kind, Quad, Value};
//!
//! let value = Value::from(Quad::AskYes);
//! assert_eq!(value.kind(), Kind::Quad);
//! assert_eq!(value.to_string(), "ask-yes");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod address;
mod error;
mod kind;
mod pattern;
mod quad;
mod slist;
mod value;

pub use address::Address;
pub use error::{ValueError, ValueResult};
pub use kind::Kind;
pub use pattern::ConfigRegex;
pub use quad::Quad;
pub use slist::StringList;
pub use value::Value;
