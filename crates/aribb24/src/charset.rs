//! 文字コード変換の共通インターフェイスと、ARIB STD-B24の実装。

use crate::eight::decode::{self, DecodeError, Options};
use crate::eight::encode;

/// デコードした文字の出力先。
pub trait TextSink {
    /// 文字を1つ追記する。
    fn push_char(&mut self, c: char);
}

impl TextSink for String {
    #[inline]
    fn push_char(&mut self, c: char) {
        self.push(c);
    }
}

/// UTF-16で追記する。基本多言語面を超える文字はサロゲートペアになる。
impl TextSink for Vec<u16> {
    #[inline]
    fn push_char(&mut self, c: char) {
        let mut buf = [0; 2];
        self.extend_from_slice(c.encode_utf16(&mut buf));
    }
}

/// 文字コード。
///
/// `start`と`count`は文字（Unicodeスカラー値）単位で`text`の範囲を指定する。
/// 範囲が`text`を超える場合は`text`の終わりまでに切り詰められるため、
/// `count`に`usize::MAX`を渡すと`start`以降の全体を意味する。
pub trait Charset: Sync {
    /// 文字コードの名前。
    fn name(&self) -> &'static str;

    /// `bytes`をデコードして`out`に追記する。
    ///
    /// 符号列の構造が壊れていた場合は`false`を返すが、それまでに追記した文字は残る。
    fn decode(&self, out: &mut String, bytes: &[u8]) -> bool;

    /// `text`の範囲内の全ての文字を符号化できる場合に`true`を返す。
    fn can_encode(&self, text: &str, start: usize, count: usize) -> bool;

    /// `text`の範囲内の文字を符号化して`out`に追記し、符号化した文字数を返す。
    ///
    /// 符号化できない文字があった場合はその直前で終了するため、戻り値は`count`より小さくなる。
    fn encode(&self, out: &mut Vec<u8>, text: &str, start: usize, count: usize) -> usize;
}

/// ARIB STD-B24の8単位符号。
///
/// 状態を持たないため、[`ARIB_STD_B24`]を複数のスレッドから同時に使ってもよい。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AribCharsetB24;

/// [`AribCharsetB24`]の唯一のインスタンス。
pub static ARIB_STD_B24: AribCharsetB24 = AribCharsetB24;

impl AribCharsetB24 {
    /// 文字コードの名前。
    pub const NAME: &'static str = "ARIB-STD-B24";

    /// `bytes`をデコードして`out`に追記する。
    ///
    /// 符号列の構造が壊れていた場合はその内容をエラーとして返す。
    #[inline]
    pub fn try_decode<S: TextSink + ?Sized>(
        &self,
        out: &mut S,
        bytes: &[u8],
    ) -> Result<(), DecodeError> {
        decode::decode(bytes, Options::DEFAULT, out)
    }

    /// `bytes`をデコードしてUTF-16で`out`に追記する。
    pub fn decode_utf16(&self, out: &mut Vec<u16>, bytes: &[u8]) -> bool {
        self.report(self.try_decode(out, bytes))
    }

    fn report(&self, result: Result<(), DecodeError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{}: {}", Self::NAME, e);
                false
            }
        }
    }
}

impl Charset for AribCharsetB24 {
    #[inline]
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decode(&self, out: &mut String, bytes: &[u8]) -> bool {
        self.report(self.try_decode(out, bytes))
    }

    fn can_encode(&self, text: &str, start: usize, count: usize) -> bool {
        encode::can_encode(char_range(text, start, count))
    }

    fn encode(&self, out: &mut Vec<u8>, text: &str, start: usize, count: usize) -> usize {
        encode::encode(out, char_range(text, start, count), Options::DEFAULT)
    }
}

/// 名前から文字コードを探す。大文字小文字は区別しない。
pub fn by_name(name: &str) -> Option<&'static dyn Charset> {
    const NAMES: [&str; 2] = [AribCharsetB24::NAME, "ARIB"];

    if NAMES.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        Some(&ARIB_STD_B24)
    } else {
        None
    }
}

/// 文字単位で`start`から`count`文字分の範囲を切り出す。
fn char_range(text: &str, start: usize, count: usize) -> &str {
    let Some((begin, _)) = text.char_indices().nth(start) else {
        return "";
    };
    let rest = &text[begin..];
    let end = rest.char_indices().nth(count).map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_range() {
        assert_eq!(char_range("あいうえお", 1, 2), "いう");
        assert_eq!(char_range("あいうえお", 3, usize::MAX), "えお");
        assert_eq!(char_range("あいうえお", 0, 0), "");
        assert_eq!(char_range("あいうえお", 5, 1), "");
        assert_eq!(char_range("あいうえお", usize::MAX, usize::MAX), "");
        assert_eq!(char_range("", 0, usize::MAX), "");
    }

    #[test]
    fn test_decode() {
        let mut s = String::from(">");
        assert!(ARIB_STD_B24.decode(&mut s, b"\x0E\x30\x21\x0F\x41"));
        assert_eq!(s, ">亜A");

        let mut s = String::new();
        assert!(!ARIB_STD_B24.decode(&mut s, b"\x41\x0E\x30"));
        assert_eq!(s, "A");

        let mut buf = Vec::new();
        assert!(ARIB_STD_B24.decode_utf16(&mut buf, b"\x41\x0E\x7A\x56"));
        assert_eq!(buf, [0x0041, 0xD83C, 0xDE11]);
    }

    #[test]
    fn test_encode() {
        let mut out = Vec::new();
        assert_eq!(ARIB_STD_B24.encode(&mut out, "xA亜y", 1, 2), 2);
        assert_eq!(out, b"A\x0E\x30\x21");

        let mut out = Vec::new();
        assert_eq!(ARIB_STD_B24.encode(&mut out, "亜\u{1F600}亜", 0, usize::MAX), 1);
        assert_eq!(out, b"\x0E\x30\x21");

        assert!(ARIB_STD_B24.can_encode("亜\u{1F600}亜", 2, 1));
        assert!(!ARIB_STD_B24.can_encode("亜\u{1F600}亜", 0, usize::MAX));
    }

    #[test]
    fn test_by_name() {
        let charset = by_name("ARIB-STD-B24").unwrap();
        assert_eq!(charset.name(), "ARIB-STD-B24");
        assert!(by_name("arib-std-b24").is_some());
        assert!(by_name("ARIB").is_some());
        assert!(by_name("SHIFT_JIS").is_none());

        let mut s = String::new();
        assert!(charset.decode(&mut s, b"B24"));
        assert_eq!(s, "B24");
    }
}
