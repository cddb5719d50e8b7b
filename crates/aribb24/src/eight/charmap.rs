//! 文字符号集合と、その符号表の管理。
//!
//! 各符号集合は94文字の「区」を単位とした表で構成される。
//! 1バイト符号は1区のみ、2バイト符号は最大[`MAX_BANDS`]個の連続した区の集まりで表す。
//!
//! 表は初回参照時に一度だけ構築され、以降は読み取り専用として共有される。

use std::sync::OnceLock;

use arrayvec::ArrayVec;
use fxhash::FxHashMap;

use super::table;

/// 1区あたりの文字数。
pub const ROW_SIZE: usize = 94;

/// 符号表を構成する連続した区の集まりの最大数。
pub const MAX_BANDS: usize = 4;

/// JIS X 0208から取り込む区の数（1区～84区）。
const JIS_X0208_ROWS: usize = 84;

/// 1区分の文字。
///
/// 添字は`0x21..=0x7E`（GRでは`0xA1..=0xFE`）の符号から`0x21`を引いた値で、
/// `'\0'`は未割り当てを表す。
pub type CharRow = [char; ROW_SIZE];

/// 連続した区の集まり。
#[derive(Debug, Clone, Copy)]
pub struct CharRows {
    /// 先頭の区（0始まり、つまり1区が0）。
    pub first: usize,
    /// 区の並び。
    pub rows: &'static [CharRow],
}

impl CharRows {
    #[inline]
    const fn new(first: usize, rows: &'static [CharRow]) -> CharRows {
        CharRows { first, rows }
    }

    /// `row`の区が含まれていればその区を返す。
    #[inline]
    fn get(&self, row: usize) -> Option<&'static CharRow> {
        row.checked_sub(self.first).and_then(|i| self.rows.get(i))
    }
}

/// 文字符号集合。
///
/// エスケープシーケンスで指示される符号集合のうち、文字に変換できるものとそうでないものを区別する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharSet {
    /// 英数、1バイト符号。
    Alphanumeric,
    /// 平仮名、1バイト符号。
    Hiragana,
    /// 片仮名、1バイト符号。
    Katakana,
    /// JIS X 0201 片仮名、1バイト符号。
    JisX0201Katakana,
    /// 漢字、2バイト符号。
    KanjiStandard,
    /// 追加記号、2バイト符号。
    KanjiAdditional,
    /// 非対応の1バイト符号（モザイク、DRCS）。
    Unsupported1,
    /// 非対応の2バイト符号（JIS互換漢字2面、DRCS-0）。
    Unsupported2,
    /// マクロ、1バイト符号。
    Macro,
}

impl CharSet {
    /// 全ての符号集合。
    pub const ALL: [CharSet; 9] = [
        CharSet::Alphanumeric,
        CharSet::Hiragana,
        CharSet::Katakana,
        CharSet::JisX0201Katakana,
        CharSet::KanjiStandard,
        CharSet::KanjiAdditional,
        CharSet::Unsupported1,
        CharSet::Unsupported2,
        CharSet::Macro,
    ];

    /// 符号化の際に文字を探す順序。
    ///
    /// 複数の符号集合に含まれる文字は、この順で最初に見つかった符号集合で符号化される。
    pub const ENCODE_ORDER: [CharSet; 6] = [
        CharSet::Alphanumeric,
        CharSet::Hiragana,
        CharSet::Katakana,
        CharSet::JisX0201Katakana,
        CharSet::KanjiStandard,
        CharSet::KanjiAdditional,
    ];

    /// 2バイト符号であれば`true`を返す。
    #[inline]
    pub fn is_two_byte(self) -> bool {
        matches!(
            self,
            CharSet::KanjiStandard | CharSet::KanjiAdditional | CharSet::Unsupported2
        )
    }

    /// この符号集合の符号表を返す。
    #[inline]
    pub fn map(self) -> &'static CharMap {
        registry().map(self)
    }
}

/// 文字符号集合の符号表。
#[derive(Debug, Clone)]
pub struct CharMap {
    set: CharSet,
    bands: ArrayVec<CharRows, MAX_BANDS>,
}

impl CharMap {
    fn new(set: CharSet, bands: &[CharRows]) -> CharMap {
        debug_assert!(set.is_two_byte() || bands.len() <= 1);
        CharMap {
            set,
            bands: bands.iter().copied().collect(),
        }
    }

    /// 2バイト符号であれば`true`を返す。
    #[inline]
    pub fn is_two_byte(&self) -> bool {
        self.set.is_two_byte()
    }

    /// 符号表を構成する区の集まり。
    #[inline]
    pub fn bands(&self) -> &[CharRows] {
        &self.bands
    }

    /// 0始まりの区点から文字を得る。
    ///
    /// 範囲外や未割り当ての場合は`None`を返す。
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        let row = self.bands.iter().find_map(|band| band.get(row))?;
        row.get(col).copied().filter(|&c| c != '\0')
    }

    /// 1バイト符号の図形符号`c1`（`0x21..=0x7E`）から文字を得る。
    #[inline]
    pub fn decode1(&self, c1: u8) -> Option<char> {
        self.get(0, c1.checked_sub(0x21)? as usize)
    }

    /// 2バイト符号の図形符号`c1`・`c2`（共に`0x21..=0x7E`）から文字を得る。
    #[inline]
    pub fn decode2(&self, c1: u8, c2: u8) -> Option<char> {
        self.get(c1.checked_sub(0x21)? as usize, c2.checked_sub(0x21)? as usize)
    }

    /// 割り当てられた文字を区点の昇順で返す。
    pub fn chars(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.bands.iter().flat_map(|band| {
            band.rows.iter().enumerate().flat_map(move |(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &c)| c != '\0')
                    .map(move |(col, &c)| (band.first + i, col, c))
            })
        })
    }
}

/// 符号表内の文字の位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 文字を含む符号集合。
    pub set: CharSet,
    /// 0始まりの区。1バイト符号では常に0。
    pub row: u8,
    /// 0始まりの点。
    pub col: u8,
}

impl Position {
    /// GL領域に置いた際の符号を返す。
    pub fn codes(&self) -> ArrayVec<u8, 2> {
        let mut codes = ArrayVec::new();
        if self.set.is_two_byte() {
            codes.push(0x21 + self.row);
        }
        codes.push(0x21 + self.col);
        codes
    }
}

/// 全ての符号表と、文字から符号表内の位置を引くための逆引き表。
#[derive(Debug)]
pub struct Registry {
    maps: [CharMap; CharSet::ALL.len()],
    reverse: FxHashMap<char, Position>,
}

impl Registry {
    fn build() -> Registry {
        let jis = CharRows::new(0, jis_x0208_rows());
        let kanji = CharRows::new(JIS_X0208_ROWS, &table::ADDITIONAL_KANJI_ROWS);
        let symbols = CharRows::new(89, &table::ADDITIONAL_SYMBOL_ROWS);

        let maps = CharSet::ALL.map(|set| match set {
            CharSet::Alphanumeric => single_row(set, &table::ALPHANUMERIC_ROW),
            CharSet::Hiragana => single_row(set, &table::HIRAGANA_ROW),
            CharSet::Katakana => single_row(set, &table::KATAKANA_ROW),
            CharSet::JisX0201Katakana => single_row(set, &table::JIS_X0201_KATAKANA_ROW),
            CharSet::KanjiStandard => CharMap::new(set, &[jis, kanji, symbols]),
            CharSet::KanjiAdditional => CharMap::new(set, &[kanji, symbols]),
            CharSet::Unsupported1 | CharSet::Unsupported2 | CharSet::Macro => {
                CharMap::new(set, &[])
            }
        });

        let mut reverse = FxHashMap::default();
        for set in CharSet::ENCODE_ORDER {
            for (row, col, c) in maps[set as usize].chars() {
                reverse.entry(c).or_insert(Position {
                    set,
                    row: row as u8,
                    col: col as u8,
                });
            }
        }
        log::debug!("built ARIB character maps: {} encodable chars", reverse.len());

        Registry { maps, reverse }
    }

    /// `set`の符号表を返す。
    #[inline]
    pub fn map(&self, set: CharSet) -> &CharMap {
        &self.maps[set as usize]
    }

    /// `c`を含む符号表内の位置を、[`CharSet::ENCODE_ORDER`]の優先順で返す。
    #[inline]
    pub fn find(&self, c: char) -> Option<Position> {
        self.reverse.get(&c).copied()
    }
}

/// 全ての符号表を返す。
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::build)
}

fn single_row(set: CharSet, row: &'static CharRow) -> CharMap {
    CharMap::new(set, &[CharRows::new(0, std::slice::from_ref(row))])
}

/// JIS X 0208の1区～84区を返す。
fn jis_x0208_rows() -> &'static [CharRow] {
    static ROWS: OnceLock<Box<[CharRow]>> = OnceLock::new();
    ROWS.get_or_init(|| {
        (0..JIS_X0208_ROWS)
            .map(|row| {
                let mut cells = ['\0'; ROW_SIZE];
                // 9区～15区はARIBでは使わない（WHATWGの表ではNEC特殊文字が入っている）
                if !(8..15).contains(&row) {
                    for (col, cell) in cells.iter_mut().enumerate() {
                        *cell = euc_jp_char(row as u8, col as u8).unwrap_or('\0');
                    }
                }
                cells
            })
            .collect()
    })
}

/// EUC-JPを経由して0始まりの区点の文字を得る。
fn euc_jp_char(row: u8, col: u8) -> Option<char> {
    let bytes = [0xA1 + row, 0xA1 + col];
    let s = encoding_rs::EUC_JP.decode_without_bom_handling_and_without_replacement(&bytes)?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_byte_maps() {
        let alnum = CharSet::Alphanumeric.map();
        assert!(!alnum.is_two_byte());
        assert_eq!(alnum.bands().len(), 1);
        assert_eq!(alnum.decode1(0x41), Some('A'));
        assert_eq!(alnum.decode1(0x5C), Some('\u{A5}'));
        assert_eq!(alnum.decode1(0x20), None);
        assert_eq!(alnum.decode1(0x7F), None);

        assert_eq!(CharSet::Hiragana.map().decode1(0x22), Some('あ'));
        assert_eq!(CharSet::Hiragana.map().decode1(0x74), None);
        assert_eq!(CharSet::Katakana.map().decode1(0x22), Some('ア'));
        assert_eq!(CharSet::JisX0201Katakana.map().decode1(0x31), Some('ｱ'));
        assert_eq!(CharSet::JisX0201Katakana.map().decode1(0x60), None);
    }

    #[test]
    fn test_two_byte_maps() {
        let kanji = CharSet::KanjiStandard.map();
        assert!(kanji.is_two_byte());
        assert_eq!(kanji.decode2(0x21, 0x21), Some('\u{3000}'));
        assert_eq!(kanji.decode2(0x30, 0x21), Some('亜'));
        assert_eq!(kanji.decode2(0x46, 0x7C), Some('日'));
        assert_eq!(kanji.decode2(0x75, 0x21), Some('㐂'));
        assert_eq!(kanji.decode2(0x7A, 0x56), Some('\u{1F211}'));
        // 9区～15区と87区～89区は未割り当て
        assert_eq!(kanji.decode2(0x2D, 0x21), None);
        assert_eq!(kanji.decode2(0x78, 0x21), None);

        let additional = CharSet::KanjiAdditional.map();
        assert_eq!(additional.decode2(0x30, 0x21), None);
        assert_eq!(additional.decode2(0x7A, 0x56), Some('\u{1F211}'));
    }

    #[test]
    fn test_unsupported_maps_never_match() {
        for set in [CharSet::Unsupported1, CharSet::Unsupported2, CharSet::Macro] {
            let map = set.map();
            assert!(map.bands().is_empty());
            for c1 in 0x21..=0x7E {
                assert_eq!(map.decode1(c1), None);
                for c2 in 0x21..=0x7E {
                    assert_eq!(map.decode2(c1, c2), None);
                }
            }
        }
    }

    #[test]
    fn test_find_priority() {
        let reg = registry();
        assert_eq!(
            reg.find('A'),
            Some(Position {
                set: CharSet::Alphanumeric,
                row: 0,
                col: 0x20,
            })
        );
        // 長音記号は平仮名と片仮名と漢字に含まれる
        assert_eq!(reg.find('ー').map(|p| p.set), Some(CharSet::Hiragana));
        assert_eq!(reg.find('ヴ').map(|p| p.set), Some(CharSet::Katakana));
        assert_eq!(reg.find('ｱ').map(|p| p.set), Some(CharSet::JisX0201Katakana));
        assert_eq!(reg.find('亜').map(|p| p.set), Some(CharSet::KanjiStandard));
        assert_eq!(
            reg.find('\u{1F211}').map(|p| p.set),
            Some(CharSet::KanjiStandard)
        );
        assert_eq!(reg.find('\u{10FFFF}'), None);
    }

    #[test]
    fn test_position_codes() {
        let pos = registry().find('亜').unwrap();
        assert_eq!(pos.codes().as_slice(), &[0x30, 0x21]);
        let pos = registry().find('a').unwrap();
        assert_eq!(pos.codes().as_slice(), &[0x61]);
    }

    #[test]
    fn test_chars_order() {
        let mut chars = CharSet::KanjiAdditional.map().chars();
        assert_eq!(chars.next(), Some((84, 0, '㐂')));
        let last = CharSet::KanjiAdditional.map().chars().last();
        assert_eq!(last, Some((93, 92, '㉛')));
    }
}
