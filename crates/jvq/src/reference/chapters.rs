//! Story chapter in which each enemy first appears
//!
//! The assignment is hand-curated and may contain mistakes; enemies missing
//! from the table are reported as [`Chapter::Unknown`].

use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

/// Chapter label; declaration order is the report sort order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    EnumIter,
    IntoStaticStr,
    Display,
)]
pub enum Chapter {
    #[strum(serialize = "1の巻")]
    Chapter1,
    #[strum(serialize = "2の巻")]
    Chapter2,
    #[strum(serialize = "3の巻")]
    Chapter3,
    #[strum(serialize = "4の巻")]
    Chapter4,
    #[strum(serialize = "5の巻")]
    Chapter5,
    #[strum(serialize = "6の巻")]
    Chapter6,
    #[strum(serialize = "7の巻")]
    Chapter7,
    #[strum(serialize = "8の巻")]
    Chapter8,
    #[strum(serialize = "9の巻")]
    Chapter9,
    #[strum(serialize = "10の巻")]
    Chapter10,
    #[strum(serialize = "オニガランド")]
    Onigaland,
    #[strum(serialize = "オーロラ王国")]
    AuroraKingdom,
    #[strum(serialize = "ボス")]
    Boss,
    #[strum(serialize = "不明")]
    Unknown,
}

#[rustfmt::skip]
static CHAPTER_BY_ENEMY: [(u8, Chapter); 167] = [
    (0x01, Chapter::Boss), // ウシまつ
    (0x02, Chapter::Boss), // おおなまず
    (0x04, Chapter::Chapter1), // どくまんじゅう
    (0x05, Chapter::Chapter1), // レッドスネーク
    (0x06, Chapter::Chapter1), // しろぼうず
    (0x07, Chapter::Chapter1), // カマおとこ
    (0x08, Chapter::Boss), // まむしおとこ
    (0x09, Chapter::Chapter1), // フライングバム
    (0x0A, Chapter::Chapter1), // スカルバット
    (0x0B, Chapter::Chapter1), // ダイキチ
    (0x0C, Chapter::Chapter1), // へルラッツ
    (0x0D, Chapter::Chapter1), // アッカンべー
    (0x0E, Chapter::Chapter1), // へらへら
    (0x0F, Chapter::Chapter1), // クモジン
    (0x10, Chapter::Chapter1), // からくりマン
    (0x11, Chapter::Chapter1), // ブラックマン
    (0x12, Chapter::Chapter1), // かげにん
    (0x13, Chapter::Chapter1), // にんけん
    (0x14, Chapter::Boss), // デビルクローン
    (0x15, Chapter::Chapter2), // べムガー
    (0x16, Chapter::Chapter2), // デスグりーン
    (0x17, Chapter::Chapter2), // へルモンキー
    (0x18, Chapter::Chapter2), // シェルビー
    (0x19, Chapter::Chapter2), // へびおんな
    (0x1A, Chapter::Chapter2), // ドラゴンマン
    (0x1B, Chapter::Chapter2), // ぎょろん
    (0x1C, Chapter::Chapter2), // メカタツノコ
    (0x1D, Chapter::Boss), // タツノコつかい
    (0x1E, Chapter::Boss), // うつぼうず
    (0x1F, Chapter::Chapter3), // おおとげむし
    (0x20, Chapter::Chapter3), // マグマンゼりー
    (0x21, Chapter::Chapter3), // ひふきガメ
    (0x22, Chapter::Chapter3), // べロべロべー
    (0x23, Chapter::Chapter3), // ヒダシメ
    (0x24, Chapter::Chapter3), // バットクルス
    (0x25, Chapter::Chapter3), // かえんマン
    (0x26, Chapter::Chapter3), // いんねび
    (0x27, Chapter::Boss), // かえんだいおう
    (0x28, Chapter::Chapter4), // マッドボアー
    (0x29, Chapter::Chapter4), // ひゃっかんいぬ
    (0x2A, Chapter::Chapter4), // ウルフマン
    (0x2B, Chapter::Chapter4), // りトルエイプ
    (0x2C, Chapter::Chapter4), // しろやまた
    (0x2D, Chapter::Chapter4), // へルバット
    (0x2E, Chapter::Chapter4), // くらやみマン
    (0x2F, Chapter::Chapter4), // シャドウマン
    (0x30, Chapter::Boss), // ムササビだゆう
    (0x31, Chapter::Chapter5), // あまのじゃく
    (0x32, Chapter::Chapter5), // クレイジーカウ
    (0x33, Chapter::Chapter5), // レッドソーサー
    (0x34, Chapter::Chapter5), // しにがみこぞう
    (0x35, Chapter::Chapter5), // にんげんもどき
    (0x36, Chapter::Chapter5), // バトルナイト
    (0x37, Chapter::Boss), // コウモりだゆう
    (0x38, Chapter::Chapter6), // ララバイかめん
    (0x39, Chapter::Chapter6), // スーパークロン
    (0x3A, Chapter::Chapter6), // シャーぺイン
    (0x3B, Chapter::Chapter6), // サソラム
    (0x3C, Chapter::Chapter6), // コカーメン
    (0x3D, Chapter::Chapter6), // カーメン
    (0x3E, Chapter::Chapter6), // きがマン
    (0x3F, Chapter::Boss), // ビッグカンカン
    (0x40, Chapter::Chapter6), // マッドミイラ
    (0x41, Chapter::Chapter6), // ファラー
    (0x42, Chapter::Chapter6), // スフインツク
    (0x43, Chapter::Boss), // ツタンだいおう
    (0x44, Chapter::Chapter7), // パニュロン
    (0x45, Chapter::Chapter7), // ガオウ
    (0x46, Chapter::Chapter7), // アイスマン
    (0x47, Chapter::Chapter7), // ひょうがんだん
    (0x48, Chapter::Chapter7), // ガンテツゾンビ
    (0x49, Chapter::Chapter7), // ゆきひめ
    (0x4A, Chapter::Chapter7), // ダークへッド
    (0x4B, Chapter::Chapter7), // ひょうけつマン
    (0x4C, Chapter::Chapter7), // ひょうがコング
    (0x4D, Chapter::Boss), // だるまだいし
    (0x4E, Chapter::Chapter8), // へルファイヤー
    (0x4F, Chapter::Chapter8), // どろたぼう
    (0x50, Chapter::Chapter8), // ゾンビー
    (0x51, Chapter::Chapter8), // のろいひめ
    (0x52, Chapter::Chapter8), // ゾンビコウモり
    (0x53, Chapter::Chapter8), // メタルパラソル
    (0x54, Chapter::Chapter8), // あしがるゾンビ
    (0x55, Chapter::Chapter8), // のろいマン
    (0x56, Chapter::Chapter8), // スカルホッパー
    (0x57, Chapter::Chapter8), // ミステりーアイ
    (0x58, Chapter::Boss), // ゾンビまおう
    (0x59, Chapter::Chapter8), // かねくいだま
    (0x5A, Chapter::Chapter8), // ラーゴン
    (0x5B, Chapter::Chapter8), // モスカルラ
    (0x5C, Chapter::Chapter8), // ダンダン
    (0x5D, Chapter::Chapter8), // キンゾー
    (0x5E, Chapter::Chapter8), // ガキゾンビ
    (0x5F, Chapter::Chapter8), // ブレインソーサ
    (0x60, Chapter::Boss), // ロボゴールド
    (0x61, Chapter::Chapter1), // キノコング
    (0x63, Chapter::Chapter9), // あかぼうず
    (0x64, Chapter::Chapter9), // ダークネス
    (0x65, Chapter::Chapter9), // まぼろしかめん
    (0x66, Chapter::Chapter9), // ろくろ
    (0x67, Chapter::Chapter9), // まそうりょ
    (0x68, Chapter::Chapter9), // はんにゃ
    (0x69, Chapter::Chapter9), // ドラゴルド
    (0x6A, Chapter::Boss), // バイオフラワー
    (0x6B, Chapter::Chapter9), // マンイーター
    (0x6C, Chapter::Chapter9), // フラワー
    (0x6D, Chapter::Chapter10), // みらいマン
    (0x6E, Chapter::Chapter10), // ジョックー
    (0x6F, Chapter::Chapter10), // ミンミン
    (0x70, Chapter::Chapter10), // アイアンアイ
    (0x71, Chapter::Chapter10), // ガンダーロボ
    (0x72, Chapter::Chapter10), // レイザータンク
    (0x73, Chapter::Boss), // ボスガンダー１
    (0x74, Chapter::Boss), // ボスガンダー２
    (0x75, Chapter::Chapter10), // メガべルガー
    (0x76, Chapter::Chapter10), // レガルゴ
    (0x77, Chapter::Chapter10), // スカイキラー
    (0x78, Chapter::Boss), // エイりアンドー
    (0x79, Chapter::Boss), // キラーウルフ
    (0x7A, Chapter::Boss), // メタルブロック
    (0x7B, Chapter::Boss), // フライウイドウ
    (0x7C, Chapter::Boss), // サーべンラガー
    (0x7D, Chapter::Boss), // マインマスター
    (0x7E, Chapter::Onigaland), // クレイジーババ
    (0x7F, Chapter::Onigaland), // まへいもち
    (0x80, Chapter::Onigaland), // ドグウアーマー
    (0x81, Chapter::Onigaland), // へビオトコ
    (0x82, Chapter::Boss), // イヌゾンビ
    (0x83, Chapter::Onigaland), // あおぼうず
    (0x84, Chapter::Onigaland), // オニデーモン
    (0x85, Chapter::Onigaland), // マグマン
    (0x86, Chapter::Onigaland), // モンスタージジ
    (0x87, Chapter::Onigaland), // あおきし
    (0x88, Chapter::Onigaland), // オニタコン
    (0x89, Chapter::Boss), // サルボス
    (0x8A, Chapter::Onigaland), // シーサーぺント
    (0x8B, Chapter::Onigaland), // ブルーアンクル
    (0x8C, Chapter::Onigaland), // スネークポッド
    (0x8D, Chapter::Onigaland), // レッドドッグ
    (0x8E, Chapter::Onigaland), // ブルードッグ
    (0x8F, Chapter::Onigaland), // バンコパ
    (0x90, Chapter::Onigaland), // ピーチボーイズ
    (0x91, Chapter::Boss), // モモタロゾンビ
    (0x92, Chapter::Boss), // キラーウルフ
    (0x93, Chapter::AuroraKingdom), // グりーンアイ
    (0x94, Chapter::AuroraKingdom), // つるりん
    (0x95, Chapter::AuroraKingdom), // へビーガル
    (0x96, Chapter::AuroraKingdom), // スカイマン
    (0x97, Chapter::AuroraKingdom), // クレバス
    (0x98, Chapter::AuroraKingdom), // グりーンケルプ
    (0x99, Chapter::AuroraKingdom), // イノクラッシュ
    (0x9A, Chapter::AuroraKingdom), // アイスファイヤ
    (0x9B, Chapter::AuroraKingdom), // べムカッター
    (0x9C, Chapter::AuroraKingdom), // がいこつむし
    (0x9D, Chapter::AuroraKingdom), // シャドーマスク
    (0x9E, Chapter::AuroraKingdom), // カニモンス
    (0x9F, Chapter::AuroraKingdom), // アイスストーン
    (0xA0, Chapter::AuroraKingdom), // ゆきみアイス
    (0xA1, Chapter::AuroraKingdom), // ブルーザウルス
    (0xA2, Chapter::AuroraKingdom), // じんめんいわ
    (0xA3, Chapter::AuroraKingdom), // エレキラドン
    (0xA4, Chapter::AuroraKingdom), // ブビ
    (0xA5, Chapter::AuroraKingdom), // キルスライダー
    (0xA6, Chapter::Boss), // メタルブロック
    (0xA9, Chapter::Chapter2), // しきゃくマン
    (0xAA, Chapter::Boss), // キンタロゾンビ
    (0xAC, Chapter::Boss), // ウシまつ
];

/// Chapter of `enemy_id`, or [`Chapter::Unknown`] if not curated
pub fn chapter_of(enemy_id: u8) -> Chapter {
    CHAPTER_BY_ENEMY
        .binary_search_by_key(&enemy_id, |&(id, _)| id)
        .map(|index| CHAPTER_BY_ENEMY[index].1)
        .unwrap_or(Chapter::Unknown)
}

/// Free-text notes on enemies with behavior the status record does not show
pub fn enemy_note(enemy_id: u8) -> Option<&'static str> {
    match enemy_id {
        // エイりアンドー
        0x78 => Some(
            "プレイヤーの行動選択後のターン開始時に命の上位バイトが#$7Fに上書きされる。(ターン開始時に命が32513(#$7F01)以上に回復する)",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_is_sorted() {
        assert!(CHAPTER_BY_ENEMY.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_chapter_lookup() {
        assert_eq!(chapter_of(0x01), Chapter::Boss);
        assert_eq!(chapter_of(0x04), Chapter::Chapter1);
        assert_eq!(chapter_of(0x6D), Chapter::Chapter10);
        assert_eq!(chapter_of(0x93), Chapter::AuroraKingdom);
        assert_eq!(chapter_of(0x03), Chapter::Unknown);
        assert_eq!(chapter_of(0xAD), Chapter::Unknown);
    }

    #[test]
    fn test_chapter_order() {
        let order: Vec<Chapter> = Chapter::iter().collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(order.first(), Some(&Chapter::Chapter1));
        assert_eq!(order.last(), Some(&Chapter::Unknown));
        assert_eq!(Chapter::Chapter10.to_string(), "10の巻");
    }

    #[test]
    fn test_enemy_note() {
        assert!(enemy_note(0x78).is_some());
        assert_eq!(enemy_note(0x01), None);
    }
}
