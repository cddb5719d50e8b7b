use assert_matches::assert_matches;
use hex_literal::hex;

use aribb24::charset::{by_name, AribCharsetB24};
use aribb24::eight::charmap::{registry, CharSet};
use aribb24::eight::decode::Options;
use aribb24::{AribStr, AribString, Charset, DecodeError, ARIB_STD_B24};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn decode(bytes: &[u8]) -> (String, bool) {
    let mut s = String::new();
    let ok = ARIB_STD_B24.decode(&mut s, bytes);
    (s, ok)
}

#[test]
fn round_trip() {
    init_logger();

    let texts = [
        "",
        "ARIB STD-B24",
        "ニュース・天気予報\n明日は晴れ",
        "ｱﾆﾒ「ひらがな」とカタカナー",
        "[字]\u{1F211}",
    ];
    for text in texts {
        let mut bytes = Vec::new();
        let n = ARIB_STD_B24.encode(&mut bytes, text, 0, usize::MAX);
        assert_eq!(n, text.chars().count(), "{:?}", text);
        assert!(ARIB_STD_B24.can_encode(text, 0, usize::MAX));

        assert_eq!(decode(&bytes), (text.to_string(), true), "{:?}", text);
    }
}

#[test]
fn every_encodable_char_round_trips() {
    let reg = registry();
    for set in CharSet::ENCODE_ORDER {
        for (_, _, c) in reg.map(set).chars() {
            let text = c.to_string();
            let (s, n) = AribString::encode(&text, Options::DEFAULT);
            assert_eq!(n, 1, "{:?}", c);
            assert_eq!(s.try_to_string(Options::DEFAULT), Ok(text), "{:?}", c);
        }
    }
}

#[test]
fn default_state_decode() {
    assert_eq!(decode(b"\x41"), ("A".to_string(), true));
    assert_eq!(
        decode(&(0x21..=0x7E).collect::<Vec<u8>>()).0.chars().count(),
        94
    );
}

#[test]
fn locked_shift_persists() {
    assert_eq!(
        decode(&hex!("0E 30 21 30 22 30 23 0F 41")),
        ("亜唖娃A".to_string(), true)
    );
}

#[test]
fn single_shift_is_one_char() {
    // G2に漢字を指示してSS2
    assert_eq!(
        decode(&hex!("1B 24 2A 42 19 46 7C 41 42")),
        ("日AB".to_string(), true)
    );
}

#[test]
fn truncation_keeps_prefix() {
    for (bytes, prefix) in [
        (&hex!("41 42 0E 30")[..], "AB"),
        (&hex!("41 1B 24 29")[..], "A"),
        (&hex!("41 1D")[..], "A"),
        (&hex!("41 9B 31 3B")[..], "A"),
    ] {
        assert_eq!(decode(bytes), (prefix.to_string(), false), "{:02X?}", bytes);
    }

    let mut s = String::new();
    assert_matches!(
        ARIB_STD_B24.try_decode(&mut s, &hex!("41 42 0E 30")),
        Err(DecodeError::TruncatedChar { offset: 3 })
    );
}

#[test]
fn unknown_final_byte() {
    let mut s = String::new();
    assert_matches!(
        ARIB_STD_B24.try_decode(&mut s, &hex!("41 1B 29 7F")),
        Err(DecodeError::UnknownEscape {
            offset: 1,
            byte: 0x7F
        })
    );
    assert_eq!(s, "A");
}

#[test]
fn encode_priority() {
    let find = |c| registry().find(c).map(|p| p.set);
    assert_eq!(find('A'), Some(CharSet::Alphanumeric));
    assert_eq!(find('ー'), Some(CharSet::Hiragana));
    assert_eq!(find('・'), Some(CharSet::Hiragana));
    assert_eq!(find('ヴ'), Some(CharSet::Katakana));
    assert_eq!(find('ｶ'), Some(CharSet::JisX0201Katakana));
    assert_eq!(find('漢'), Some(CharSet::KanjiStandard));
}

#[test]
fn unsupported_sets_never_match() {
    // モザイク、DRCS、JIS互換漢字2面に指示した状態の文字は出力されない
    assert_eq!(
        decode(&hex!("1B 28 32 21 7E 1B 29 20 41 0E 21 1B 24 2A 3A 1B 6E 30 21")),
        (String::new(), true)
    );
    for set in [CharSet::Unsupported1, CharSet::Unsupported2] {
        assert_eq!(registry().map(set).chars().count(), 0);
    }
}

#[test]
fn utf16_output() {
    let mut buf = Vec::new();
    assert!(ARIB_STD_B24.decode_utf16(&mut buf, &hex!("0E 7A 56 0F 41")));
    assert_eq!(String::from_utf16(&buf).unwrap(), "\u{1F211}A");
}

#[test]
fn arib_str_display() {
    let s = AribStr::from_bytes(&hex!("30 21 A2 0E 41"));
    assert_eq!(s.display(Options::ARIB).to_string(), "亜あA");
}

#[test]
fn lookup_by_name() {
    let charset = by_name("arib").unwrap();
    assert_eq!(charset.name(), AribCharsetB24::NAME);
    assert!(by_name("UTF-8").is_none());
}

#[test]
fn concurrent_use() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("番組{}", i);
                let mut bytes = Vec::new();
                ARIB_STD_B24.encode(&mut bytes, &text, 0, usize::MAX);
                let mut s = String::new();
                assert!(ARIB_STD_B24.decode(&mut s, &bytes));
                s == text
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
