//! 8単位符号へのエンコード。

use super::charmap::{registry, CharSet};
use super::decode::{Designator, Options};
use super::{APR, ESC, LS0, LS1, SP};

/// 文字列をARIB STD-B24の8単位符号に変換する。
///
/// 指示・呼び出しの状態は、同じ[`Options`]で[`Decoder`][super::decode::Decoder]を生成した場合と同じ状態から始まる。
/// そのため出力した符号列は、同じ`Options`でデコードすると元の文字列に戻る。
#[derive(Debug, Clone)]
pub struct Encoder {
    graphic_sets: [CharSet; 4],
    gl: Designator,
}

impl Encoder {
    /// `options`の状態から符号化を始める`Encoder`を生成する。
    #[inline]
    pub fn new(options: Options) -> Encoder {
        Encoder {
            graphic_sets: options.graphic_sets,
            gl: options.gl,
        }
    }

    /// `c`を符号化して`out`に追記する。
    ///
    /// 符号化できない文字の場合は何も追記せず`false`を返す。
    pub fn encode_char(&mut self, out: &mut Vec<u8>, c: char) -> bool {
        match c {
            ' ' => out.push(SP),
            '\n' => out.push(APR),
            c => {
                let Some(pos) = registry().find(c) else {
                    return false;
                };
                if !self.invoke(out, pos.set) {
                    return false;
                }
                out.extend_from_slice(&pos.codes());
            }
        }
        true
    }

    /// `text`を先頭から符号化して`out`に追記し、符号化した文字数を返す。
    ///
    /// 符号化できない文字があった場合はその直前で終了する。
    pub fn encode(&mut self, out: &mut Vec<u8>, text: &str) -> usize {
        let mut count = 0;
        for c in text.chars() {
            if !self.encode_char(out, c) {
                log::trace!("unencodable char {:?} at {}", c, count);
                break;
            }
            count += 1;
        }
        count
    }

    /// `set`をGLに呼び出す。必要なら事前に指示する。
    fn invoke(&mut self, out: &mut Vec<u8>, set: CharSet) -> bool {
        if self.graphic_sets[self.gl as usize] == set {
            return true;
        }

        let g = match self.graphic_sets.iter().position(|&s| s == set) {
            Some(i) => Designator::ALL[i],
            None => {
                let Some((g, f)) = designation(set) else {
                    return false;
                };
                self.designate(out, g, set, f);
                g
            }
        };
        if g != self.gl {
            self.lock_shift(out, g);
        }
        true
    }

    fn designate(&mut self, out: &mut Vec<u8>, g: Designator, set: CharSet, f: u8) {
        let i = 0x28 + g as u8;
        match (set.is_two_byte(), g) {
            (true, Designator::G0) => out.extend_from_slice(&[ESC, 0x24, f]),
            (true, _) => out.extend_from_slice(&[ESC, 0x24, i, f]),
            (false, _) => out.extend_from_slice(&[ESC, i, f]),
        }
        self.graphic_sets[g as usize] = set;
    }

    fn lock_shift(&mut self, out: &mut Vec<u8>, g: Designator) {
        match g {
            Designator::G0 => out.push(LS0),
            Designator::G1 => out.push(LS1),
            Designator::G2 => out.extend_from_slice(&[ESC, 0x6E]),
            Designator::G3 => out.extend_from_slice(&[ESC, 0x6F]),
        }
        self.gl = g;
    }
}

/// 符号集合を指示する先と終端文字。
fn designation(set: CharSet) -> Option<(Designator, u8)> {
    let d = match set {
        CharSet::Alphanumeric => (Designator::G0, 0x4A),
        CharSet::KanjiStandard => (Designator::G1, 0x42),
        CharSet::Hiragana => (Designator::G2, 0x30),
        CharSet::JisX0201Katakana => (Designator::G2, 0x49),
        CharSet::Katakana => (Designator::G3, 0x31),
        CharSet::KanjiAdditional => (Designator::G3, 0x3B),
        CharSet::Unsupported1 | CharSet::Unsupported2 | CharSet::Macro => return None,
    };
    Some(d)
}

/// `text`を`options`の状態から符号化して`out`に追記し、符号化した文字数を返す。
#[inline]
pub fn encode(out: &mut Vec<u8>, text: &str, options: Options) -> usize {
    Encoder::new(options).encode(out, text)
}

/// `text`の全ての文字を符号化できる場合に`true`を返す。
pub fn can_encode(text: &str) -> bool {
    let reg = registry();
    text.chars()
        .all(|c| matches!(c, ' ' | '\n') || reg.find(c).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eight::decode;

    fn encode_default(text: &str) -> (Vec<u8>, usize) {
        let mut out = Vec::new();
        let n = encode(&mut out, text, Options::DEFAULT);
        (out, n)
    }

    #[test]
    fn test_encode_default_state() {
        assert_eq!(encode_default("ARIB"), (b"ARIB".to_vec(), 4));
        assert_eq!(encode_default(""), (Vec::new(), 0));
        assert_eq!(encode_default("亜"), (vec![0x0E, 0x30, 0x21], 1));
    }

    #[test]
    fn test_encode_designation() {
        assert_eq!(
            encode_default("あ"),
            (vec![0x1B, 0x2A, 0x30, 0x1B, 0x6E, 0x22], 1)
        );
        assert_eq!(
            encode_default("ｱ"),
            (vec![0x1B, 0x2A, 0x49, 0x1B, 0x6E, 0x31], 1)
        );
        // 既に指示されていれば呼び出すだけ
        assert_eq!(
            encode_default("あA亜いA"),
            (
                vec![
                    0x1B, 0x2A, 0x30, 0x1B, 0x6E, 0x22, // あ
                    0x0F, 0x41, // A
                    0x0E, 0x30, 0x21, // 亜
                    0x1B, 0x6E, 0x24, // い
                    0x0F, 0x41, // A
                ],
                5
            )
        );
        // 平仮名と片仮名はG2とG3に分けて呼び出しだけで切り替える
        let (out, n) = encode_default("あアあアあア");
        assert_eq!(n, 6);
        assert_eq!(
            out,
            [
                0x1B, 0x2A, 0x30, 0x1B, 0x6E, 0x22, // あ
                0x1B, 0x2B, 0x31, 0x1B, 0x6F, 0x22, // ア
                0x1B, 0x6E, 0x22, 0x1B, 0x6F, 0x22, //
                0x1B, 0x6E, 0x22, 0x1B, 0x6F, 0x22,
            ]
        );
        // JIS X 0201 片仮名は平仮名を上書きする
        assert_eq!(
            encode_default("あｱ"),
            (
                vec![
                    0x1B, 0x2A, 0x30, 0x1B, 0x6E, 0x22, //
                    0x1B, 0x2A, 0x49, 0x31,
                ],
                2
            )
        );
    }

    #[test]
    fn test_encode_space_and_newline() {
        assert_eq!(
            encode_default("亜 \n亜"),
            (vec![0x0E, 0x30, 0x21, 0x20, 0x0D, 0x30, 0x21], 4)
        );
    }

    #[test]
    fn test_encode_priority() {
        // 長音記号は平仮名が優先
        assert_eq!(
            encode_default("ー"),
            (vec![0x1B, 0x2A, 0x30, 0x1B, 0x6E, 0x79], 1)
        );
        // 追加記号は漢字の符号集合で符号化される
        assert_eq!(encode_default("\u{1F211}"), (vec![0x0E, 0x7A, 0x56], 1));
    }

    #[test]
    fn test_encode_stops_at_unencodable() {
        assert_eq!(encode_default("AB\u{1F600}C"), (b"AB".to_vec(), 2));
        assert_eq!(encode_default("\u{1F600}"), (Vec::new(), 0));
    }

    #[test]
    fn test_encode_arib_options() {
        let mut out = Vec::new();
        assert_eq!(encode(&mut out, "亜A", Options::ARIB), 2);
        assert_eq!(out, [0x30, 0x21, 0x0E, 0x41]);
    }

    #[test]
    fn test_can_encode() {
        assert!(can_encode(""));
        assert!(can_encode("番組表 ARIB\nｱｲｳ"));
        assert!(!can_encode("番組\u{1F600}"));
        assert!(!can_encode("\u{FFFD}"));
    }

    #[test]
    fn test_round_trip() {
        for opts in [Options::DEFAULT, Options::ARIB] {
            let text = "ニュース 7\n天気予報、ひらがなー ｱｲｳ ¥100\u{1F211}";
            let mut out = Vec::new();
            assert_eq!(encode(&mut out, text, opts), text.chars().count());

            let mut s = String::new();
            decode::decode(&out, opts, &mut s).unwrap();
            assert_eq!(s, text);
        }
    }
}
