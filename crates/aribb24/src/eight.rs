//! ARIB STD-B24の8単位符号。

pub mod charmap;
pub mod decode;
pub mod encode;
pub mod str;
mod table;

/// ESC。
pub(crate) const ESC: u8 = 0x1B;
/// LS0（G0をGLに呼び出す）。
pub(crate) const LS0: u8 = 0x0F;
/// LS1（G1をGLに呼び出す）。
pub(crate) const LS1: u8 = 0x0E;
/// SS2（G2を1文字だけGLに呼び出す）。
pub(crate) const SS2: u8 = 0x19;
/// SS3（G3を1文字だけGLに呼び出す）。
pub(crate) const SS3: u8 = 0x1D;
/// SP。
pub(crate) const SP: u8 = 0x20;
/// APR（改行）。
pub(crate) const APR: u8 = 0x0D;
