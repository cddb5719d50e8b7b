//! 8単位符号のデコード。

use std::slice;

use thiserror::Error;

use super::charmap::CharSet;
use super::{APR, ESC, LS0, LS1, SP, SS2, SS3};
use crate::charset::TextSink;

/// 符号の指示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Designator {
    /// G0に対する指示。
    G0 = 0,
    /// G1に対する指示。
    G1 = 1,
    /// G2に対する指示。
    G2 = 2,
    /// G3に対する指示。
    G3 = 3,
}

impl Designator {
    /// G0～G3の全て。
    pub const ALL: [Designator; 4] = [
        Designator::G0,
        Designator::G1,
        Designator::G2,
        Designator::G3,
    ];

    /// エスケープシーケンスの中間文字`0x28..=0x2B`から指示先を得る。
    #[inline]
    fn from_intermediate(i: u8) -> Designator {
        debug_assert!((0x28..=0x2B).contains(&i));
        Designator::ALL[(i - 0x28) as usize]
    }
}

/// 8単位符号をデコードする際のオプション。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// 初期状態でG0～G3に指示する符号集合。
    pub graphic_sets: [CharSet; 4],

    /// 初期状態でGLに呼び出す符号集合。
    pub gl: Designator,

    /// 初期状態でGRに呼び出す符号集合。`None`の場合はGRの符号を読み飛ばす。
    pub gr: Option<Designator>,
}

impl Options {
    /// 符号列を単体でデコードする際のオプション。
    ///
    /// G0に英数、G1に漢字を指示し、G0をGLに呼び出す。GRには何も呼び出さない。
    pub const DEFAULT: Options = Options {
        graphic_sets: [
            CharSet::Alphanumeric,
            CharSet::KanjiStandard,
            CharSet::Unsupported1,
            CharSet::Unsupported1,
        ],
        gl: Designator::G0,
        gr: None,
    };

    /// 放送の番組情報などをデコードする際のオプション。
    pub const ARIB: Options = Options {
        graphic_sets: [
            CharSet::KanjiStandard,
            CharSet::Alphanumeric,
            CharSet::Hiragana,
            CharSet::Katakana,
        ],
        gl: Designator::G0,
        gr: Some(Designator::G2),
    };
}

impl Default for Options {
    fn default() -> Self {
        Options::DEFAULT
    }
}

/// 符号列の構造が壊れていたためにデコードを中断したことを示すエラー。
///
/// それまでにデコードされた文字は出力に残る。
/// `offset`はデコード中の符号列（マクロ内であればマクロ本体）における、問題のある符号の開始位置。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// エスケープシーケンスの途中で符号列が終了した。
    #[error("truncated escape sequence at {offset}")]
    TruncatedEscape {
        /// ESCの位置。
        offset: usize,
    },

    /// エスケープシーケンスに不明な符号が含まれている。
    #[error("unknown escape sequence byte {byte:#04X} at {offset}")]
    UnknownEscape {
        /// ESCの位置。
        offset: usize,
        /// 不明な符号。
        byte: u8,
    },

    /// 文字の途中で符号列が終了した。
    #[error("truncated character at {offset}")]
    TruncatedChar {
        /// 文字（またはシングルシフト）の位置。
        offset: usize,
    },

    /// 制御符号のパラメータの途中で符号列が終了した。
    #[error("truncated control sequence at {offset}")]
    TruncatedControl {
        /// 制御符号の位置。
        offset: usize,
    },

    /// マクロ定義が終了しないまま符号列が終了した。
    #[error("unterminated macro definition at {offset}")]
    UnterminatedMacro {
        /// MACROの位置。
        offset: usize,
    },
}

const MACRO_COUNT: usize = 0x7E - 0x21 + 1;

/// マクロ符号集合。
// 常にマクロを保持すると無駄にヒープを消費してしまうので、
// MACRO符号でマクロが定義されるまでは`DEFAULT_MACROS`を参照する。
#[derive(Debug, Clone)]
struct Macros {
    macros: Option<Box<[Vec<u8>; MACRO_COUNT]>>,
}

impl Macros {
    #[inline]
    fn new() -> Macros {
        Macros { macros: None }
    }

    /// `mc`で指定された符号に定義されたマクロを取得する。
    #[inline]
    fn get(&self, mc: u8) -> &[u8] {
        match self.macros {
            Some(ref macros) => &macros[(mc - 0x21) as usize],
            None => default_macro(mc),
        }
    }

    /// `mc`で指定された符号にマクロを定義する。
    fn set(&mut self, mc: u8, body: &[u8]) {
        if self.macros.is_none() && body.is_empty() && default_macro(mc).is_empty() {
            // 空の場所に空を突っ込むためにヒープ確保するのは避ける
            return;
        }

        let macros = self.macros.get_or_insert_with(|| {
            crate::utils::boxed_array(|i| default_macro(0x21 + i as u8).to_vec())
        });
        macros[(mc - 0x21) as usize] = body.to_vec();
    }
}

/// ARIB STD-B24の8単位符号をデコードする。
///
/// 状態はデコードごとに生成され、他のデコードと共有されることはない。
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    len: usize,
    iter: slice::Iter<'a, u8>,
    graphic_sets: [CharSet; 4],
    gl: Designator,
    gr: Option<Designator>,
    locked_gl: Designator,

    macros: Macros,
    nested: bool,
}

impl<'a> Decoder<'a> {
    /// `options`に従い`bytes`をデコードする`Decoder`を生成する。
    #[inline]
    pub fn new(bytes: &'a [u8], options: Options) -> Decoder<'a> {
        Decoder {
            len: bytes.len(),
            iter: bytes.iter(),
            graphic_sets: options.graphic_sets,
            gl: options.gl,
            gr: options.gr,
            locked_gl: options.gl,
            macros: Macros::new(),
            nested: false,
        }
    }

    /// マクロ本体`body`を、`parent`の現在の指示・呼び出し状態のままデコードする`Decoder`を生成する。
    ///
    /// シングルシフトはマクロを呼び出した符号にのみ作用し、本体には引き継がない。
    /// 生成された`Decoder`で状態が変わっても`parent`には影響しない。
    fn nested(parent: &Decoder, body: &'a [u8]) -> Decoder<'a> {
        Decoder {
            len: body.len(),
            iter: body.iter(),
            graphic_sets: parent.graphic_sets,
            gl: parent.locked_gl,
            gr: parent.gr,
            locked_gl: parent.locked_gl,
            macros: Macros::new(),
            nested: true,
        }
    }

    /// `Decoder`で未処理の部分をスライスとして返す。
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.iter.as_slice()
    }

    /// 処理済みのバイト数を返す。
    #[inline]
    pub fn offset(&self) -> usize {
        self.len - self.iter.len()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.iter.as_slice().first().copied()
    }

    #[inline]
    fn read_byte(&mut self) -> Option<u8> {
        self.iter.next().copied()
    }

    /// 長さが最低`n`あると分かっている場合に`n`個の符号をスキップする。
    fn skip(&mut self, n: usize) {
        if n > 0 {
            let _r = self.iter.nth(n - 1);
            debug_assert!(_r.is_some());
        }
    }

    /// 符号列の終わりまでデコードし、文字を`sink`に追記する。
    ///
    /// 変換できない文字は読み飛ばす。
    /// 符号列の構造が壊れていた場合はその時点で中断してエラーを返すが、
    /// それまでに追記した文字はそのまま残る。
    pub fn decode<S: TextSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), DecodeError> {
        loop {
            let start = self.offset();
            let Some(b) = self.read_byte() else {
                return Ok(());
            };

            match b {
                // GL: 0x21..=0x7E
                c1 @ 0x21..=0x7E => self.read_graphic(self.gl, c1, start, sink)?,

                // GR: 0xA1..=0xFE
                c1 @ 0xA1..=0xFE => match self.gr {
                    Some(g) => self.read_graphic(g, c1 & 0x7F, start, sink)?,
                    None => log::trace!("GR is not invoked: {:02X}", c1),
                },

                // C0: 0x00..=0x20

                SP | 0xA0 => sink.push_char(' '),
                APR => sink.push_char('\n'),
                LS0 => self.lock_gl(Designator::G0),
                LS1 => self.lock_gl(Designator::G1),
                SS2 => self.single_shift(Designator::G2, start, sink)?,
                SS3 => self.single_shift(Designator::G3, start, sink)?,
                ESC => self.read_esc(start)?,

                // PAPF（パラメータ1つ）
                0x16 => self.skip_params(1, start)?,
                // APS（パラメータ2つ）
                0x1C => self.skip_params(2, start)?,

                // C1: 0x7F..=0xA0

                // COL/CDC
                0x90 | 0x92 => {
                    if self.read_param(start)? == 0x20 {
                        self.skip_params(1, start)?;
                    }
                }
                // SZX/FLC/POL/WMM/HLC/RPC（パラメータ1つ）
                0x8B | 0x91 | 0x93 | 0x94 | 0x97 | 0x98 => self.skip_params(1, start)?,
                // MACRO
                0x95 => self.read_macro(start, sink)?,
                // CSI
                0x9B => self.skip_csi(start)?,
                // TIME
                0x9D => self.skip_time(start)?,

                // パラメータを取らない制御符号または未知
                b => log::trace!("skipped control {:02X}", b),
            }
        }
    }

    /// GLへの呼び出し（ロッキングシフト）。
    #[inline]
    fn lock_gl(&mut self, g: Designator) {
        self.gl = g;
        self.locked_gl = g;
    }

    /// 符号の指示。
    #[inline]
    fn designate(&mut self, g: Designator, set: CharSet) {
        self.graphic_sets[g as usize] = set;
    }

    /// `g`に指示された符号集合で、図形符号`c1`から始まる1文字を`sink`に追記する。
    fn read_graphic<S: TextSink + ?Sized>(
        &mut self,
        g: Designator,
        c1: u8,
        start: usize,
        sink: &mut S,
    ) -> Result<(), DecodeError> {
        let set = self.graphic_sets[g as usize];
        let c = match set {
            CharSet::Macro => return self.run_macro(c1, sink),
            _ if set.is_two_byte() => {
                let c2 = match self.peek() {
                    Some(c2 @ (0x21..=0x7E | 0xA1..=0xFE)) => {
                        self.skip(1);
                        c2 & 0x7F
                    }
                    // 1バイト目を捨てて2バイト目から処理し直す
                    Some(c2) => {
                        log::trace!("broken 2-byte char: {:02X} {:02X}", c1, c2);
                        return Ok(());
                    }
                    None => return Err(DecodeError::TruncatedChar { offset: start }),
                };
                set.map().decode2(c1, c2)
            }
            _ => set.map().decode1(c1),
        };

        match c {
            Some(c) => sink.push_char(c),
            None => log::trace!("unmapped char in {:?}: {:02X}", set, c1),
        }
        Ok(())
    }

    /// シングルシフト。次の1文字だけ`g`をGLに呼び出す。
    fn single_shift<S: TextSink + ?Sized>(
        &mut self,
        g: Designator,
        start: usize,
        sink: &mut S,
    ) -> Result<(), DecodeError> {
        match self.peek() {
            Some(c1 @ (0x21..=0x7E | 0xA1..=0xFE)) => {
                self.skip(1);
                self.gl = g;
                let result = self.read_graphic(g, c1 & 0x7F, start, sink);
                self.gl = self.locked_gl;
                result
            }
            // シングルシフトを取り消して通常通り処理する
            Some(b) => {
                log::trace!("single shift followed by {:02X}", b);
                Ok(())
            }
            None => Err(DecodeError::TruncatedChar { offset: start }),
        }
    }

    #[inline]
    fn esc_byte(&mut self, start: usize) -> Result<u8, DecodeError> {
        self.read_byte()
            .ok_or(DecodeError::TruncatedEscape { offset: start })
    }

    /// エスケープシーケンスを読み取る。
    fn read_esc(&mut self, start: usize) -> Result<(), DecodeError> {
        let unknown = |byte| DecodeError::UnknownEscape {
            offset: start,
            byte,
        };

        match self.esc_byte(start)? {
            // 符号の呼び出し

            // LS2
            0x6E => self.lock_gl(Designator::G2),
            // LS3
            0x6F => self.lock_gl(Designator::G3),
            // LS1R
            0x7E => self.gr = Some(Designator::G1),
            // LS2R
            0x7D => self.gr = Some(Designator::G2),
            // LS3R
            0x7C => self.gr = Some(Designator::G3),

            // 符号の指示

            // 1バイトGセット、1バイトDRCS
            i @ 0x28..=0x2B => {
                let g = Designator::from_intermediate(i);
                let set = match self.esc_byte(start)? {
                    0x20 => {
                        let f = self.esc_byte(start)?;
                        drcs_set(f, false).ok_or_else(|| unknown(f))?
                    }
                    f => graphic_set(f, false).ok_or_else(|| unknown(f))?,
                };
                self.designate(g, set);
            }
            // 2バイトGセット、2バイトDRCS
            0x24 => {
                let (g, set) = match self.esc_byte(start)? {
                    i @ 0x28..=0x2B => {
                        let g = Designator::from_intermediate(i);
                        let set = match self.esc_byte(start)? {
                            0x20 => {
                                let f = self.esc_byte(start)?;
                                drcs_set(f, true).ok_or_else(|| unknown(f))?
                            }
                            f => graphic_set(f, true).ok_or_else(|| unknown(f))?,
                        };
                        (g, set)
                    }
                    f => (
                        Designator::G0,
                        graphic_set(f, true).ok_or_else(|| unknown(f))?,
                    ),
                };
                self.designate(g, set);
            }

            b => return Err(unknown(b)),
        }

        Ok(())
    }

    #[inline]
    fn read_param(&mut self, start: usize) -> Result<u8, DecodeError> {
        self.read_byte()
            .ok_or(DecodeError::TruncatedControl { offset: start })
    }

    fn skip_params(&mut self, n: usize, start: usize) -> Result<(), DecodeError> {
        for _ in 0..n {
            self.read_param(start)?;
        }
        Ok(())
    }

    fn skip_csi(&mut self, start: usize) -> Result<(), DecodeError> {
        loop {
            match self.read_param(start)? {
                // 中間文字の次が終端文字
                0x20 => {
                    self.read_param(start)?;
                    return Ok(());
                }
                // PLD/PLU/SCS（パラメータなし）
                0x5B | 0x5C | 0x6F => return Ok(()),
                _ => {}
            }
        }
    }

    fn skip_time(&mut self, start: usize) -> Result<(), DecodeError> {
        match self.read_param(start)? {
            // 処理待ち/時間制御モード
            0x20 | 0x28 => {
                self.read_param(start)?;
            }
            // STM/DTM/OTM/PTM/ETM
            0x29 => self.skip_to_final(start)?,
            p1 => log::trace!("unknown TIME: p1={:02X}", p1),
        }
        Ok(())
    }

    /// 中間文字`0x20`と、それに続く終端文字までスキップする。
    fn skip_to_final(&mut self, start: usize) -> Result<(), DecodeError> {
        let rest = self.as_bytes();
        match memchr::memchr(0x20, rest) {
            Some(pos) if pos + 2 <= rest.len() => {
                self.skip(pos + 2);
                Ok(())
            }
            _ => Err(DecodeError::TruncatedControl { offset: start }),
        }
    }

    /// マクロ定義を読み取る。
    fn read_macro<S: TextSink + ?Sized>(
        &mut self,
        start: usize,
        sink: &mut S,
    ) -> Result<(), DecodeError> {
        let run = match self.read_param(start)? {
            0x40 => false,
            0x41 => true,
            p1 => {
                log::trace!("unknown MACRO: p1={:02X}", p1);
                return Ok(());
            }
        };
        let mc = match self.read_param(start)? {
            mc @ 0x21..=0x7E => mc,
            mc => {
                log::trace!("invalid macro code {:02X}", mc);
                return Ok(());
            }
        };

        let Some(body) = self.read_macro_body(start)? else {
            log::trace!("macro {:02X} not defined: nested MACRO", mc);
            return Ok(());
        };
        log::debug!("macro {:02X} defined: {} bytes", mc, body.len());
        self.macros.set(mc, body);

        if run {
            self.run_macro(mc, sink)?;
        }
        Ok(())
    }

    /// マクロ本体をマクロ終了まで符号単位で読み進め、本体を返す。
    ///
    /// マクロはネストできないため、本体の途中でマクロ開始が現れた場合は
    /// マクロ開始までを読み捨てて`None`を返す。
    fn read_macro_body(&mut self, start: usize) -> Result<Option<&'a [u8]>, DecodeError> {
        let eof = || DecodeError::UnterminatedMacro { offset: start };

        let body = self.as_bytes();
        loop {
            let n = match *self.as_bytes() {
                [] => return Err(eof()),

                // MACRO -> マクロ終了
                [0x95, 0x4F, ..] => break,
                // MACRO -> マクロ開始
                [0x95, 0x40 | 0x41, ..] => {
                    self.skip(2);
                    return Ok(None);
                }
                // MACRO -> 不明
                [0x95, ..] => 2,

                // GL/GR：2バイト符号の2バイト目は次のループでスキップされる
                [0x21..=0x7E | 0xA1..=0xFE, ..] => 1,

                // SS2/SS3：続く符号は次のループでスキップされる
                [SS2 | SS3, ..] => 1,
                // PAPF
                [0x16, ..] => 2,
                // APS
                [0x1C, ..] => 3,

                // ESC -> LS2/LS3/LS1R/LS2R/LS3R
                [ESC, 0x6E | 0x6F | 0x7E | 0x7D | 0x7C, ..] => 2,
                // ESC -> 2バイトDRCS
                [ESC, 0x24, 0x28..=0x2B, 0x20, ..] => 5,
                // ESC -> 1バイトDRCS
                [ESC, 0x28..=0x2B, 0x20, ..] => 4,
                // ESC -> 2バイトGセット
                [ESC, 0x24, 0x28..=0x2B, ..] => 4,
                [ESC, 0x24, ..] => 3,
                // ESC -> 1バイトGセット
                [ESC, 0x28..=0x2B, ..] => 3,
                // ESC -> 不明
                [ESC, ..] => 2,

                // COL/CDC
                [0x90 | 0x92, 0x20, ..] => 3,
                [0x90 | 0x92, ..] => 2,
                // SZX/FLC/POL/WMM/HLC/RPC
                [0x8B | 0x91 | 0x93 | 0x94 | 0x97 | 0x98, ..] => 2,

                // CSI
                [0x9B, ..] => {
                    self.skip(1);
                    self.skip_csi(start).map_err(|_| eof())?;
                    continue;
                }
                // TIME
                [0x9D, ..] => {
                    self.skip(1);
                    self.skip_time(start).map_err(|_| eof())?;
                    continue;
                }

                [_, ..] => 1,
            };
            if self.as_bytes().len() < n {
                return Err(eof());
            }
            self.skip(n);
        }

        let len = body.len() - self.as_bytes().len();
        // マクロ終了の分
        self.skip(2);
        Ok(Some(&body[..len]))
    }

    /// `mc`に定義されたマクロを現在の状態のままデコードする。
    fn run_macro<S: TextSink + ?Sized>(&mut self, mc: u8, sink: &mut S) -> Result<(), DecodeError> {
        // マクロ実行はネストできない
        if self.nested {
            log::trace!("nested macro {:02X} ignored", mc);
            return Ok(());
        }

        let body = self.macros.get(mc);
        if body.is_empty() {
            log::trace!("undefined macro {:02X}", mc);
            return Ok(());
        }

        log::debug!("run macro {:02X}", mc);
        Decoder::nested(self, body).decode(sink)
    }
}

/// `bytes`を`options`に従いデコードし、文字を`sink`に追記する。
#[inline]
pub fn decode<S: TextSink + ?Sized>(
    bytes: &[u8],
    options: Options,
    sink: &mut S,
) -> Result<(), DecodeError> {
    Decoder::new(bytes, options).decode(sink)
}

/// Gセットの終端文字から符号集合を得る。
fn graphic_set(f: u8, two_byte: bool) -> Option<CharSet> {
    let set = match (two_byte, f) {
        // 漢字、JIS互換漢字1面
        (true, 0x42 | 0x39) => CharSet::KanjiStandard,
        // JIS互換漢字2面
        (true, 0x3A) => CharSet::Unsupported2,
        // 追加記号
        (true, 0x3B) => CharSet::KanjiAdditional,

        // 英数、プロポーショナル英数
        (false, 0x4A | 0x36) => CharSet::Alphanumeric,
        // 平仮名、プロポーショナル平仮名
        (false, 0x30 | 0x37) => CharSet::Hiragana,
        // 片仮名、プロポーショナル片仮名
        (false, 0x31 | 0x38) => CharSet::Katakana,
        // JIS X 0201 片仮名
        (false, 0x49) => CharSet::JisX0201Katakana,
        // モザイクA～D
        (false, 0x32..=0x35) => CharSet::Unsupported1,

        _ => return None,
    };
    Some(set)
}

/// DRCSの終端文字から符号集合を得る。
fn drcs_set(f: u8, two_byte: bool) -> Option<CharSet> {
    let set = match (two_byte, f) {
        // DRCS-0
        (true, 0x40) => CharSet::Unsupported2,
        // DRCS-1～DRCS-15
        (false, 0x41..=0x4F) => CharSet::Unsupported1,
        // マクロ
        (false, 0x70) => CharSet::Macro,
        _ => return None,
    };
    Some(set)
}

fn default_macro(mc: u8) -> &'static [u8] {
    match mc {
        0x60..=0x6F => DEFAULT_MACROS[(mc - 0x60) as usize],
        _ => &[],
    }
}

/// 0x60..=0x6Fに既定で定義されるマクロ。
static DEFAULT_MACROS: [&[u8]; 16] = [
    b"\x1B\x24\x42\x1B\x29\x4A\x1B\x2A\x30\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x24\x42\x1B\x29\x31\x1B\x2A\x30\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x24\x42\x1B\x29\x20\x41\x1B\x2A\x30\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x32\x1B\x29\x34\x1B\x2A\x35\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x32\x1B\x29\x33\x1B\x2A\x35\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x32\x1B\x29\x20\x41\x1B\x2A\x35\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x20\x41\x1B\x29\x20\x42\x1B\x2A\x20\x43\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x20\x44\x1B\x29\x20\x45\x1B\x2A\x20\x46\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x20\x47\x1B\x29\x20\x48\x1B\x2A\x20\x49\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x20\x4A\x1B\x29\x20\x4B\x1B\x2A\x20\x4C\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x20\x4D\x1B\x29\x20\x4E\x1B\x2A\x20\x4F\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x24\x42\x1B\x29\x20\x42\x1B\x2A\x30\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x24\x42\x1B\x29\x20\x43\x1B\x2A\x30\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x24\x42\x1B\x29\x20\x44\x1B\x2A\x30\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x31\x1B\x29\x30\x1B\x2A\x4A\x1B\x2B\x20\x70\x0F\x1B\x7D",
    b"\x1B\x28\x4A\x1B\x29\x32\x1B\x2A\x20\x41\x1B\x2B\x20\x70\x0F\x1B\x7D",
];
