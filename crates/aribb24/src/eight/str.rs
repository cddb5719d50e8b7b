//! 8単位符号の文字列表現。

use std::borrow::{Borrow, Cow};
use std::fmt::{self, Write};
use std::ops;

use super::decode::{self, DecodeError, Decoder};
use super::encode::Encoder;
use crate::charset::TextSink;

/// 借用された8単位符号を表す型。
///
/// `AribStr`と[`AribString`]は、<code>&[str]</code>と[`String`]の関係と相似しており、
/// 前者は借用された参照、後者は所有権を持つ文字列である。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AribStr([u8]);

impl AribStr {
    /// バイト列から`AribStr`を生成する。
    #[must_use]
    #[inline]
    pub const fn from_bytes(bytes: &[u8]) -> &AribStr {
        // Safety: [u8]とAribStrは互換
        unsafe { &*(bytes as *const [u8] as *const AribStr) }
    }

    /// この文字列の長さを返す。
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// この文字列が空であるかどうかを返す。
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 文字列スライスをバイトスライスに変換する。
    #[must_use]
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// コピー無しに`Box<AribStr>`を`AribString`に変換する。
    #[must_use]
    #[inline]
    pub fn into_arib_string(self: Box<AribStr>) -> AribString {
        let slice = Box::<[u8]>::from(self);
        AribString(slice.into_vec())
    }

    /// [`decode::Options`]に従い8単位符号を`String`に変換する。
    ///
    /// 文字に変換できない文字符号は読み飛ばされる。
    /// 符号列の構造が壊れていた場合は、そこまでに変換できた文字列を返す。
    pub fn to_string(&self, opts: decode::Options) -> String {
        let mut buf = String::with_capacity(self.len());
        if let Err(e) = Decoder::new(self.as_bytes(), opts).decode(&mut buf) {
            log::debug!("decode stopped: {}", e);
        }
        buf
    }

    /// [`decode::Options`]に従い8単位符号を`String`に変換する。
    ///
    /// [`to_string`][AribStr::to_string]と異なり、符号列の構造が壊れていた場合はエラーを返す。
    pub fn try_to_string(&self, opts: decode::Options) -> Result<String, DecodeError> {
        let mut buf = String::with_capacity(self.len());
        Decoder::new(self.as_bytes(), opts).decode(&mut buf)?;
        Ok(buf)
    }

    /// `opts`に従い文字符号を安全に表示するための、
    /// [`Display`][`fmt::Display`]を実装したオブジェクトを返す。
    #[inline]
    pub fn display(&self, opts: decode::Options) -> Display {
        Display { inner: self, opts }
    }
}

impl Default for &AribStr {
    fn default() -> Self {
        AribStr::from_bytes(&[])
    }
}

impl fmt::Debug for AribStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AribStr(")?;
        f.debug_list()
            .entries(self.0.iter().map(|c| crate::utils::UpperHex(c)))
            .finish()?;
        f.write_str(")")
    }
}

impl From<Box<AribStr>> for Box<[u8]> {
    #[inline]
    fn from(s: Box<AribStr>) -> Self {
        // Safety: AribStrと[u8]は互換
        unsafe { Box::from_raw(Box::into_raw(s) as *mut [u8]) }
    }
}

/// 所有権を持つ8単位符号を表す型。
///
/// `AribString`と<code>&[AribStr]</code>は、[`String`]と<code>&[str]</code>の関係と相似しており、
/// 前者は所有権を持つ文字列、後者は借用された参照である。
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AribString(Vec<u8>);

impl AribString {
    /// 空の`AribString`を生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> AribString {
        AribString(Vec::new())
    }

    /// バイトのベクタから`AribString`を生成する。
    #[inline]
    #[must_use]
    pub fn from_vec(bytes: Vec<u8>) -> AribString {
        AribString(bytes)
    }

    /// `text`を`opts`の状態から8単位符号に変換する。
    ///
    /// 符号化できない文字があった場合はその直前までを変換する。
    /// 戻り値は変換後の文字列と、変換できた文字数の組。
    pub fn encode(text: &str, opts: decode::Options) -> (AribString, usize) {
        let mut buf = Vec::with_capacity(text.len());
        let n = Encoder::new(opts).encode(&mut buf, text);
        (AribString(buf), n)
    }

    /// `AribString`の内容をバイトのスライスで返す。
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 文字列全体を含む[`AribStr`]スライスを抽出する。
    #[inline]
    #[must_use]
    pub fn as_arib_str(&self) -> &AribStr {
        self
    }

    /// `AribString`を`Box`に包んだ[`AribStr`]で返す。
    #[inline]
    pub fn into_boxed_arib_str(self) -> Box<AribStr> {
        // Safety: [u8]とAribStrは互換
        unsafe { Box::from_raw(Box::into_raw(self.0.into_boxed_slice()) as *mut AribStr) }
    }

    /// `AribString`を切り詰めて全内容を削除する。
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// `AribString`に指定された8単位符号を追記する。
    ///
    /// 連結した結果は、追記した符号列が前の符号列の最後の状態でデコードされることに注意。
    #[inline]
    pub fn push_str(&mut self, string: &AribStr) {
        self.0.extend_from_slice(string.as_bytes());
    }
}

impl Default for AribString {
    #[inline]
    fn default() -> AribString {
        AribString::new()
    }
}

impl ops::Deref for AribString {
    type Target = AribStr;

    #[inline]
    fn deref(&self) -> &Self::Target {
        AribStr::from_bytes(&self.0)
    }
}

impl fmt::Debug for AribString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl ops::AddAssign<&AribStr> for AribString {
    #[inline]
    fn add_assign(&mut self, rhs: &AribStr) {
        self.push_str(rhs);
    }
}

impl From<Vec<u8>> for AribString {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        AribString::from_vec(bytes)
    }
}

impl From<AribString> for Box<AribStr> {
    #[inline]
    fn from(s: AribString) -> Self {
        s.into_boxed_arib_str()
    }
}

impl<'a> From<&'a AribString> for Cow<'a, AribStr> {
    #[inline]
    fn from(s: &'a AribString) -> Self {
        Cow::Borrowed(s.as_arib_str())
    }
}

impl Borrow<AribStr> for AribString {
    #[inline]
    fn borrow(&self) -> &AribStr {
        self
    }
}

impl ToOwned for AribStr {
    type Owned = AribString;

    fn to_owned(&self) -> Self::Owned {
        AribString(self.as_bytes().into())
    }
}

/// [`AribStr`]をUTF-8として表示するための構造体。
pub struct Display<'a> {
    inner: &'a AribStr,
    opts: decode::Options,
}

/// デコードした文字を`Formatter`に直接書き込む。
struct FormatterSink<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl TextSink for FormatterSink<'_, '_> {
    #[inline]
    fn push_char(&mut self, c: char) {
        if self.result.is_ok() {
            self.result = self.f.write_char(c);
        }
    }
}

impl<'a> fmt::Display for Display<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sink = FormatterSink { f, result: Ok(()) };
        if let Err(e) = Decoder::new(self.inner.as_bytes(), self.opts).decode(&mut sink) {
            log::debug!("decode stopped: {}", e);
        }
        sink.result
    }
}

impl<'a> fmt::Debug for Display<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::eight::decode::Options;

    #[test]
    fn test_to_string() {
        let s = AribStr::from_bytes(b"\x0E\x30\x21\x0F\x41\x1B");
        assert_eq!(s.to_string(Options::DEFAULT), "亜A");
        assert_matches!(
            s.try_to_string(Options::DEFAULT),
            Err(DecodeError::TruncatedEscape { offset: 5 })
        );

        let s = AribStr::from_bytes(b"\x30\x21\xA2");
        assert_eq!(s.try_to_string(Options::ARIB), Ok("亜あ".to_string()));
    }

    #[test]
    fn test_display() {
        let s = AribStr::from_bytes(b"ARIB\x0D\x0E\x46\x7C");
        assert_eq!(format!("{}", s.display(Options::DEFAULT)), "ARIB\n日");
        assert_eq!(format!("{:?}", s.display(Options::DEFAULT)), format!("{:?}", s));
    }

    #[test]
    fn test_debug() {
        let s = AribStr::from_bytes(&[0x0E, 0x30, 0x21]);
        assert_eq!(format!("{:?}", s), "AribStr([0E, 30, 21])");
        assert_eq!(format!("{:?}", s.to_owned()), "AribStr([0E, 30, 21])");
    }

    #[test]
    fn test_encode() {
        let (s, n) = AribString::encode("天気 A", Options::DEFAULT);
        assert_eq!(n, 4);
        assert_eq!(s.as_bytes(), b"\x0E\x45\x37\x35\x24\x20\x0F\x41");
        assert_eq!(s.to_string(Options::DEFAULT), "天気 A");

        let (s, n) = AribString::encode("A\u{1F600}", Options::DEFAULT);
        assert_eq!(n, 1);
        assert_eq!(s.as_bytes(), b"A");
    }

    #[test]
    fn test_conversions() {
        let mut s = AribString::from(b"AB".to_vec());
        s += AribStr::from_bytes(b"C");
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());

        let boxed: Box<AribStr> = s.clone().into();
        assert_eq!(&*boxed, s.as_arib_str());
        assert_eq!(boxed.into_arib_string(), s);

        let cow: Cow<AribStr> = (&s).into();
        assert_eq!(AribString::from(cow.into_owned()), s);

        s.clear();
        assert!(s.is_empty());
        assert_eq!(s, AribString::default());
        assert!(<&AribStr>::default().is_empty());
    }
}
