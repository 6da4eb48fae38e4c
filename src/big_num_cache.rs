use lazy_static::*;

use crate::big_num_constants::*;

lazy_static! {
    /// Decimal digits of every block value, least significant first.
    pub static ref DIGITS_OF_BLOCK: Vec<[u8; BLOCK_DIGITS]> = (0..BASE)
        .map(|mut block| {
            let mut digits = [0u8; BLOCK_DIGITS];
            for d in digits.iter_mut() {
                *d = (block % 10) as u8;
                block /= 10;
            }
            digits
        })
        .collect();

    /// Zero padded ASCII text of every block value, most significant first.
    pub static ref TEXT_OF_BLOCK: Vec<[u8; BLOCK_DIGITS]> = DIGITS_OF_BLOCK
        .iter()
        .map(|digits| {
            let mut text = [b'0'; BLOCK_DIGITS];
            for (c, d) in text.iter_mut().zip(digits.iter().rev()) {
                *c = b'0' + d;
            }
            text
        })
        .collect();
}

#[test]
fn test_block_tables() {
    assert_eq!(DIGITS_OF_BLOCK.len(), BASE as usize);
    assert_eq!(DIGITS_OF_BLOCK[1234], [4, 3, 2, 1]);
    assert_eq!(DIGITS_OF_BLOCK[7], [7, 0, 0, 0]);
    assert_eq!(&TEXT_OF_BLOCK[7], b"0007");
    assert_eq!(&TEXT_OF_BLOCK[9999], b"9999");
    assert_eq!(&TEXT_OF_BLOCK[0], b"0000");
}
