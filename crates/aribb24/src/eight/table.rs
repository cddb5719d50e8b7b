//! 文字符号集合の表。
//!
//! JIS X 0208の1区～84区は[`super::charmap`]で`encoding_rs`から構築するため、
//! ここにはARIB独自の部分のみを置く。

use super::charmap::CharRow;

/// 英数（JIS X 0201 ローマ文字）。
pub static ALPHANUMERIC_ROW: CharRow = [
    '!', '"', '#', '$', '%', '&', '\'', '(',
    ')', '*', '+', ',', '-', '.', '/', '0',
    '1', '2', '3', '4', '5', '6', '7', '8',
    '9', ':', ';', '<', '=', '>', '?', '@',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X',
    'Y', 'Z', '[', '\u{00A5}', ']', '^', '_', '`',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', 's', 't', 'u', 'v', 'w', 'x',
    'y', 'z', '{', '|', '}', '\u{203E}',
];

/// 平仮名。
pub static HIRAGANA_ROW: CharRow = [
    '\u{3041}', '\u{3042}', '\u{3043}', '\u{3044}', '\u{3045}', '\u{3046}', '\u{3047}', '\u{3048}',
    '\u{3049}', '\u{304A}', '\u{304B}', '\u{304C}', '\u{304D}', '\u{304E}', '\u{304F}', '\u{3050}',
    '\u{3051}', '\u{3052}', '\u{3053}', '\u{3054}', '\u{3055}', '\u{3056}', '\u{3057}', '\u{3058}',
    '\u{3059}', '\u{305A}', '\u{305B}', '\u{305C}', '\u{305D}', '\u{305E}', '\u{305F}', '\u{3060}',
    '\u{3061}', '\u{3062}', '\u{3063}', '\u{3064}', '\u{3065}', '\u{3066}', '\u{3067}', '\u{3068}',
    '\u{3069}', '\u{306A}', '\u{306B}', '\u{306C}', '\u{306D}', '\u{306E}', '\u{306F}', '\u{3070}',
    '\u{3071}', '\u{3072}', '\u{3073}', '\u{3074}', '\u{3075}', '\u{3076}', '\u{3077}', '\u{3078}',
    '\u{3079}', '\u{307A}', '\u{307B}', '\u{307C}', '\u{307D}', '\u{307E}', '\u{307F}', '\u{3080}',
    '\u{3081}', '\u{3082}', '\u{3083}', '\u{3084}', '\u{3085}', '\u{3086}', '\u{3087}', '\u{3088}',
    '\u{3089}', '\u{308A}', '\u{308B}', '\u{308C}', '\u{308D}', '\u{308E}', '\u{308F}', '\u{3090}',
    '\u{3091}', '\u{3092}', '\u{3093}', '\0', '\0', '\0', '\u{309D}', '\u{309E}',
    '\u{30FC}', '\u{3002}', '\u{300C}', '\u{300D}', '\u{3001}', '\u{30FB}',
];

/// 片仮名。
pub static KATAKANA_ROW: CharRow = [
    '\u{30A1}', '\u{30A2}', '\u{30A3}', '\u{30A4}', '\u{30A5}', '\u{30A6}', '\u{30A7}', '\u{30A8}',
    '\u{30A9}', '\u{30AA}', '\u{30AB}', '\u{30AC}', '\u{30AD}', '\u{30AE}', '\u{30AF}', '\u{30B0}',
    '\u{30B1}', '\u{30B2}', '\u{30B3}', '\u{30B4}', '\u{30B5}', '\u{30B6}', '\u{30B7}', '\u{30B8}',
    '\u{30B9}', '\u{30BA}', '\u{30BB}', '\u{30BC}', '\u{30BD}', '\u{30BE}', '\u{30BF}', '\u{30C0}',
    '\u{30C1}', '\u{30C2}', '\u{30C3}', '\u{30C4}', '\u{30C5}', '\u{30C6}', '\u{30C7}', '\u{30C8}',
    '\u{30C9}', '\u{30CA}', '\u{30CB}', '\u{30CC}', '\u{30CD}', '\u{30CE}', '\u{30CF}', '\u{30D0}',
    '\u{30D1}', '\u{30D2}', '\u{30D3}', '\u{30D4}', '\u{30D5}', '\u{30D6}', '\u{30D7}', '\u{30D8}',
    '\u{30D9}', '\u{30DA}', '\u{30DB}', '\u{30DC}', '\u{30DD}', '\u{30DE}', '\u{30DF}', '\u{30E0}',
    '\u{30E1}', '\u{30E2}', '\u{30E3}', '\u{30E4}', '\u{30E5}', '\u{30E6}', '\u{30E7}', '\u{30E8}',
    '\u{30E9}', '\u{30EA}', '\u{30EB}', '\u{30EC}', '\u{30ED}', '\u{30EE}', '\u{30EF}', '\u{30F0}',
    '\u{30F1}', '\u{30F2}', '\u{30F3}', '\u{30F4}', '\u{30F5}', '\u{30F6}', '\u{30FD}', '\u{30FE}',
    '\u{30FC}', '\u{3002}', '\u{300C}', '\u{300D}', '\u{3001}', '\u{30FB}',
];

/// JIS X 0201 片仮名（半角片仮名）。
pub static JIS_X0201_KATAKANA_ROW: CharRow = [
    '\u{FF61}', '\u{FF62}', '\u{FF63}', '\u{FF64}', '\u{FF65}', '\u{FF66}', '\u{FF67}', '\u{FF68}',
    '\u{FF69}', '\u{FF6A}', '\u{FF6B}', '\u{FF6C}', '\u{FF6D}', '\u{FF6E}', '\u{FF6F}', '\u{FF70}',
    '\u{FF71}', '\u{FF72}', '\u{FF73}', '\u{FF74}', '\u{FF75}', '\u{FF76}', '\u{FF77}', '\u{FF78}',
    '\u{FF79}', '\u{FF7A}', '\u{FF7B}', '\u{FF7C}', '\u{FF7D}', '\u{FF7E}', '\u{FF7F}', '\u{FF80}',
    '\u{FF81}', '\u{FF82}', '\u{FF83}', '\u{FF84}', '\u{FF85}', '\u{FF86}', '\u{FF87}', '\u{FF88}',
    '\u{FF89}', '\u{FF8A}', '\u{FF8B}', '\u{FF8C}', '\u{FF8D}', '\u{FF8E}', '\u{FF8F}', '\u{FF90}',
    '\u{FF91}', '\u{FF92}', '\u{FF93}', '\u{FF94}', '\u{FF95}', '\u{FF96}', '\u{FF97}', '\u{FF98}',
    '\u{FF99}', '\u{FF9A}', '\u{FF9B}', '\u{FF9C}', '\u{FF9D}', '\u{FF9E}', '\u{FF9F}', '\0',
    '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
    '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
    '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
    '\0', '\0', '\0', '\0', '\0', '\0',
];

/// 追加漢字（85区～86区）。
pub static ADDITIONAL_KANJI_ROWS: [CharRow; 2] = [
    // 85区
    [
        '\u{3402}', '\u{20158}', '\u{4EFD}', '\u{4EFF}', '\u{4F9A}', '\u{4FC9}', '\u{509C}', '\u{511E}',
        '\u{51BC}', '\u{351F}', '\u{5307}', '\u{5361}', '\u{536C}', '\u{8A79}', '\u{20BB7}', '\u{544D}',
        '\u{5496}', '\u{549C}', '\u{54A9}', '\u{550E}', '\u{554A}', '\u{5672}', '\u{56E4}', '\u{5733}',
        '\u{5734}', '\u{FA10}', '\u{5880}', '\u{59E4}', '\u{5A23}', '\u{5A55}', '\u{5BEC}', '\u{FA11}',
        '\u{37E2}', '\u{5EAC}', '\u{5F34}', '\u{5F45}', '\u{5FB7}', '\u{6017}', '\u{6075}', '\u{6130}',
        '\u{6624}', '\u{66C8}', '\u{66D9}', '\u{66FA}', '\u{66FB}', '\u{6852}', '\u{9FC4}', '\u{6911}',
        '\u{693B}', '\u{6A45}', '\u{6A91}', '\u{6ADB}', '\u{233CC}', '\u{233FE}', '\u{235C4}', '\u{6BF1}',
        '\u{6CE0}', '\u{6D2E}', '\u{FA45}', '\u{6DBF}', '\u{6DCA}', '\u{6DF8}', '\u{FA46}', '\u{6F5E}',
        '\u{6FF9}', '\u{7064}', '\0', '\u{242EE}', '\u{7147}', '\u{71C1}', '\u{7200}', '\u{739F}',
        '\u{73A8}', '\u{73C9}', '\u{73D6}', '\u{741B}', '\u{7421}', '\u{FA4A}', '\u{7426}', '\u{742A}',
        '\u{742C}', '\u{7439}', '\u{744B}', '\u{3EDA}', '\u{7575}', '\u{7581}', '\u{7772}', '\u{4093}',
        '\u{78C8}', '\u{78E0}', '\u{7947}', '\u{79AE}', '\u{9FC6}', '\u{4103}',
    ],
    // 86区
    [
        '\u{9FC5}', '\u{79DA}', '\u{7A1E}', '\u{7B7F}', '\u{7C31}', '\u{4264}', '\u{7D8B}', '\u{7FA1}',
        '\u{8118}', '\u{813A}', '\u{FA6D}', '\u{82AE}', '\u{845B}', '\u{84DC}', '\u{84EC}', '\u{8559}',
        '\u{85CE}', '\u{8755}', '\u{87EC}', '\u{880B}', '\u{88F5}', '\u{89D2}', '\u{8AF6}', '\u{8DCE}',
        '\u{8FBB}', '\u{8FF6}', '\u{90DD}', '\u{9127}', '\u{912D}', '\u{91B2}', '\u{9233}', '\u{9288}',
        '\u{9321}', '\u{9348}', '\u{9592}', '\u{96DE}', '\u{9903}', '\u{9940}', '\u{9AD9}', '\u{9BD6}',
        '\u{9DD7}', '\u{9EB4}', '\u{9EB5}', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0',
    ],
];

/// 追加記号（90区～94区）。
///
/// 複数の文字で表される記号は未割り当てとしている。
pub static ADDITIONAL_SYMBOL_ROWS: [CharRow; 5] = [
    // 90区
    [
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\u{1F14A}',
        '\u{1F14C}', '\u{1F13F}', '\u{1F146}', '\u{1F14B}', '\u{1F210}', '\u{1F211}', '\u{1F212}', '\u{1F213}',
        '\u{1F142}', '\u{1F214}', '\u{1F215}', '\u{1F216}', '\u{1F14D}', '\u{1F131}', '\u{1F13D}', '\u{2B1B}',
        '\u{2B24}', '\u{1F217}', '\u{1F218}', '\u{1F219}', '\u{1F21A}', '\u{1F21B}', '\u{26BF}', '\u{1F21C}',
        '\u{1F21D}', '\u{1F21E}', '\u{1F21F}', '\u{1F220}', '\u{1F221}', '\u{1F222}', '\u{1F223}', '\u{1F224}',
        '\u{1F225}', '\u{1F14E}', '\u{3299}', '\u{1F200}', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0',
    ],
    // 91区
    [
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0',
    ],
    // 92区
    [
        '\u{2192}', '\u{2190}', '\u{2191}', '\u{2193}', '\u{25CF}', '\u{25CB}', '\u{5E74}', '\u{6708}',
        '\u{65E5}', '\u{5186}', '\u{33A1}', '\u{33A5}', '\u{339D}', '\u{33A0}', '\u{33A4}', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\u{6C0F}', '\u{526F}', '\u{5143}', '\u{6545}', '\u{524D}', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\u{25B6}',
        '\u{25C0}', '\u{3016}', '\u{3017}', '\u{27D0}', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0',
    ],
    // 93区
    [
        '\u{322A}', '\u{322B}', '\u{322C}', '\u{322D}', '\u{322E}', '\u{322F}', '\u{3230}', '\u{3237}',
        '\u{337E}', '\u{337D}', '\u{337C}', '\u{337B}', '\u{2116}', '\u{2121}', '\u{3036}', '\u{25CB}',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\u{3351}', '\u{338F}',
        '\u{3390}', '\0', '\u{339E}', '\u{33A2}', '\u{3371}', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\u{2600}',
        '\u{2601}', '\u{2602}', '\u{26C4}', '\u{2616}', '\u{2617}', '\u{25BD}', '\u{25BC}', '\u{2666}',
        '\u{2665}', '\u{2663}', '\u{2660}', '\u{233A}', '\u{29BF}', '\u{203C}', '\u{2049}', '\0',
        '\u{2614}', '\0', '\0', '\0', '\u{26A1}', '\0', '\u{26C8}', '\u{269E}',
        '\u{269F}', '\u{266C}', '\u{260E}', '\0', '\0', '\0',
    ],
    // 94区
    [
        '\u{2160}', '\u{2161}', '\u{2162}', '\u{2163}', '\u{2164}', '\u{2165}', '\u{2166}', '\u{2167}',
        '\u{2168}', '\u{2169}', '\u{216A}', '\u{216B}', '\u{2470}', '\u{2471}', '\u{2472}', '\u{2473}',
        '\u{2474}', '\u{2475}', '\u{2476}', '\u{2477}', '\u{2478}', '\u{2479}', '\u{247A}', '\u{247B}',
        '\u{247C}', '\u{247D}', '\u{247E}', '\u{247F}', '\u{3251}', '\u{3252}', '\u{3253}', '\u{3254}',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
        '\0', '\0', '\u{3255}', '\u{3256}', '\u{3257}', '\u{3258}', '\u{3259}', '\u{325A}',
        '\u{2460}', '\u{2461}', '\u{2462}', '\u{2463}', '\u{2464}', '\u{2465}', '\u{2466}', '\u{2467}',
        '\u{2468}', '\u{2469}', '\u{246A}', '\u{246B}', '\u{246C}', '\u{246D}', '\u{246E}', '\u{246F}',
        '\u{2776}', '\u{2777}', '\u{2778}', '\u{2779}', '\u{277A}', '\u{277B}', '\u{277C}', '\u{277D}',
        '\u{277E}', '\u{277F}', '\u{24EB}', '\u{24EC}', '\u{325B}', '\0',
    ],
];
