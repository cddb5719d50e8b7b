use std::fmt;

/// 要素数`N`のヒープに確保される配列を、`f`を呼び出した戻り値で生成する。
pub fn boxed_array<T, const N: usize, F>(f: F) -> Box<[T; N]>
where
    F: FnMut(usize) -> T,
{
    let slice = (0..N).map(f).collect::<Vec<T>>().into_boxed_slice();

    // Safety: 要素数の分かっている`Box<[T]>`から`Box<[T; N]>`への変換でしかない
    unsafe { Box::from_raw(Box::into_raw(slice) as *mut [T; N]) }
}

/// `Debug`で値を2桁の大文字16進数として出力する。
pub struct UpperHex<T>(pub T);

impl<T: fmt::UpperHex> fmt::Debug for UpperHex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_array() {
        assert_eq!(
            boxed_array::<Option<[u8; 64]>, 8192, _>(|_| None),
            (0..8192)
                .map(|_| None)
                .collect::<Vec<Option<[u8; 64]>>>()
                .try_into()
                .unwrap(),
        );
        assert_eq!(*boxed_array::<usize, 4, _>(|i| i * 2), [0, 2, 4, 6]);
    }

    #[test]
    fn test_upper_hex() {
        assert_eq!(format!("{:?}", UpperHex(0x0Eu8)), "0E");
        assert_eq!(format!("{:?}", UpperHex(&0xA1u8)), "A1");
    }
}
