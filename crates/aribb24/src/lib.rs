//! ARIB STD-B24で規定される8単位符号を変換するためのクレート。
//!
//! 放送の番組情報などで使われる8単位符号を[`String`]や`Vec<u16>`にデコードし、
//! 逆に文字列を8単位符号へエンコードする。
//!
//! ```
//! use aribb24::charset::{Charset, ARIB_STD_B24};
//!
//! let mut text = String::new();
//! assert!(ARIB_STD_B24.decode(&mut text, b"\x0E\x46\x7C\x0F\x42\x32\x34"));
//! assert_eq!(text, "日B24");
//!
//! let mut bytes = Vec::new();
//! assert_eq!(ARIB_STD_B24.encode(&mut bytes, &text, 0, usize::MAX), 4);
//! assert_eq!(bytes, b"\x0E\x46\x7C\x0F\x42\x32\x34");
//! ```

#![deny(missing_docs)]

pub mod charset;
pub mod eight;
mod utils;

pub use charset::{Charset, TextSink, ARIB_STD_B24};
pub use eight::decode::DecodeError;
pub use eight::str::{AribStr, AribString};
