//! Glyph table for names stored in the image
//!
//! Names use a single-byte table of kana, digits and a handful of symbols.
//! Bytes without an entry are rejected rather than replaced.

use crate::error::{Error, Result};

/// Ideographic space, used as padding in name slots
pub const PADDING: char = '\u{3000}';

#[rustfmt::skip]
static GLYPHS: [Option<char>; 256] = [
    /* 0_ */ None,      Some('あ'), Some('い'), Some('う'), Some('え'), Some('お'), Some('か'), Some('き'), Some('く'), Some('け'), Some('こ'), Some('さ'), Some('し'), Some('す'), Some('せ'), Some('そ'),
    /* 1_ */ None,      Some('た'), Some('ち'), Some('つ'), Some('て'), Some('と'), Some('な'), Some('に'), Some('ぬ'), Some('ね'), Some('の'), Some('は'), Some('ひ'), Some('ふ'), Some('へ'), Some('ほ'),
    /* 2_ */ Some('両'), Some('ま'), Some('み'), Some('む'), Some('め'), Some('も'), Some('や'), Some('ゆ'), Some('よ'), Some('ら'), Some('り'), Some('る'), Some('れ'), Some('ろ'), Some('わ'), Some('を'),
    /* 3_ */ Some('０'), Some('１'), Some('２'), Some('３'), Some('４'), Some('５'), Some('６'), Some('７'), Some('８'), Some('９'), Some('！'), Some('？'), Some('「'), Some('／'), Some('・'), Some('ん'),
    /* 4_ */ Some('■'), Some('ア'), Some('イ'), Some('ウ'), Some('エ'), Some('オ'), Some('カ'), Some('キ'), Some('ク'), Some('ケ'), Some('コ'), Some('サ'), Some('シ'), Some('ス'), Some('セ'), Some('ソ'),
    /* 5_ */ None,      Some('タ'), Some('チ'), Some('ツ'), Some('テ'), Some('ト'), Some('ナ'), Some('ニ'), Some('ヌ'), Some('ネ'), Some('ノ'), Some('ハ'), Some('ヒ'), Some('フ'), Some('ー'), Some('ホ'),
    /* 6_ */ None,      Some('マ'), Some('ミ'), Some('ム'), Some('メ'), Some('モ'), Some('ヤ'), Some('ユ'), Some('ヨ'), Some('ラ'), Some('◆'), Some('ル'), Some('レ'), Some('ロ'), Some('ワ'), Some('超'),
    /* 7_ */ None,      None,      None,      None,      None,      None,      None,      None,      Some('ッ'), Some('ャ'), Some('ュ'), Some('ョ'), Some('ァ'), Some('っ'), Some('ゃ'), Some('ン'),
    /* 8_ */ Some('ゅ'), Some('ょ'), None,      Some('ェ'), None,      None,      Some('が'), Some('ぎ'), Some('ぐ'), Some('げ'), Some('ご'), Some('ざ'), Some('じ'), Some('ず'), Some('ぜ'), Some('ぞ'),
    /* 9_ */ None,      Some('だ'), Some('ぢ'), Some('づ'), Some('で'), Some('ど'), None,      None,      None,      None,      None,      Some('ば'), Some('び'), Some('ぶ'), Some('べ'), Some('ぼ'),
    /* A_ */ None,      Some('ぱ'), Some('ぴ'), Some('ぶ'), Some('ぺ'), Some('ぽ'), Some('パ'), Some('ピ'), Some('プ'), None,      Some('ポ'), None,      None,      None,      None,      None,
    /* B_ */ None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,
    /* C_ */ None,      None,      None,      None,      None,      None,      Some('ガ'), Some('ギ'), Some('グ'), Some('ゲ'), Some('ゴ'), Some('ザ'), Some('ジ'), Some('ズ'), Some('ゼ'), Some('ゾ'),
    /* D_ */ None,      Some('ダ'), Some('ヂ'), Some('ヅ'), Some('デ'), Some('ド'), None,      None,      None,      None,      None,      Some('バ'), Some('ビ'), Some('ブ'), None,      Some('ボ'),
    /* E_ */ None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,
    /* F_ */ None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      None,      Some(PADDING),
];

/// Look up a single byte
pub fn glyph(byte: u8) -> Option<char> {
    GLYPHS[byte as usize]
}

/// Decode a byte string, failing on the first unmapped byte
pub fn decode(bytes: &[u8]) -> Result<String> {
    bytes
        .iter()
        .enumerate()
        .map(|(position, &byte)| glyph(byte).ok_or(Error::UnmappedByte { byte, position }))
        .collect()
}

/// Decode and strip surrounding whitespace, including the padding glyph
pub fn decode_trimmed(bytes: &[u8]) -> Result<String> {
    Ok(decode(bytes)?.trim().to_string())
}
