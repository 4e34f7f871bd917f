//! Human-readable descriptions of maps and world map terrain

use crate::image::record;

#[rustfmt::skip]
static MAP_DESCRIPTIONS: [(u16, &str); 201] = [
    (0x0000, "ワールドマップ"),
    (0x0001, "オニガランドワールドマップ"),
    (0x0002, "オーロラ王国ワールドマップ"),
    (0x0004, "柳生の里"),
    (0x0008, "尾張の町:奉行所1階"),
    (0x0009, "尾張の町:奉行所地下牢"),
    (0x0025, "アザラシ村とゆきおとこ村の間の洞窟"),
    (0x0026, "オーロラ村とアザラシ村の間の洞窟2"),
    (0x0028, "浪速の都:越後屋への地下通路(左から右)"),
    (0x002A, "なまず大明神:入り口の社"),
    (0x002B, "なまず大明神:おおなまずのフロア"),
    (0x002C, "からくり城:1階"),
    (0x002E, "からくり城:地下1階牢屋"),
    (0x0030, "柳生の里(江戸の町崩壊後)"),
    (0x0031, "からくり城:入り口の細い通路"),
    (0x0035, "柳生の里:但馬邸(江戸の町崩壊後)"),
    (0x003A, "シードラゴン:縦に長い階段があるフロア"),
    (0x003B, "シードラゴン:最下層(水の流れているフロア)"),
    (0x003C, "シードラゴン:一番上の層の右の部屋・3番目の層の右の部屋(何も無い部屋)"),
    (0x003D, "シードラゴン:乙姫の前の人が7人いる部屋"),
    (0x003E, "シードラゴン:たつのこつかいのフロアの1つ前の宝箱が6個ある部屋"),
    (0x003F, "シードラゴン:うつぼうずのフロア"),
    (0x0040, "龍宮からシードラゴンへの通路1"),
    (0x0041, "シードラゴン:入ってすぐのフロア"),
    (0x0042, "シードラゴン:最下層からうつぼうずの途中の部屋1"),
    (0x0043, "龍宮"),
    (0x0044, "シードラゴン:たつのこつかいのいる部屋"),
    (0x0045, "シードラゴン:一番上の層の左の部屋・2番目の層の左の部屋(たるが2個ある部屋)"),
    (0x0047, "シードラゴン:2番目の層の真ん中の部屋・3番目の層の左の部屋(たるが5個ある部屋)"),
    (0x0048, "シードラゴン:2番目の層の右の部屋(うつぼのカギがある部屋)"),
    (0x004A, "龍宮からシードラゴンへの通路2"),
    (0x004C, "シードラゴン:最下層からうつぼうずの途中の部屋2"),
    (0x004D, "シードラゴン:最下層からうつぼうずの途中の部屋3"),
    (0x004E, "シードラゴン:最下層からうつぼうずの途中の部屋4"),
    (0x004F, "シードラゴン:最下層からうつぼうずの途中の部屋5"),
    (0x0050, "火炎城:フロア1(火炎城最初のフロア)"),
    (0x0051, "暗闇城:地下4階(こうもりだゆうのフロア)"),
    (0x0053, "龍の祠(さばのすけで龍宮の入り口を見つけるフロア)"),
    (0x0054, "のろい城:2階"),
    (0x0056, "火炎城:フロア2"),
    (0x0058, "火炎城:フロア3"),
    (0x0059, "火炎城:フロア4(横1列のフロア)"),
    (0x005A, "氷結城:左の塔4階"),
    (0x005B, "氷結城:右の塔4階"),
    (0x005C, "イワンのだっしゅつ"),
    (0x005D, "龍宮への入り口の次の真っ黒のフロア(じゅうべえ落下)"),
    (0x005F, "シードラゴン:乙姫の部屋"),
    (0x0060, "火炎城:フロア5"),
    (0x0061, "暗闇城:地下1階(入ってすぐのフロア)"),
    (0x0062, "暗闇城:地下2階"),
    (0x0063, "暗闇城:地下3階(牢屋)"),
    (0x0064, "暗闇城:地下2階(ヘルバットのフロア)"),
    (0x0065, "浪速の都(からくり城攻略前の暗い状態)"),
    (0x0067, "浪速の都:越後屋からからくり城への地下通路(下から上)"),
    (0x0068, "飢餓城:1階"),
    (0x006B, "浪速の都:越後屋"),
    (0x006E, "飢餓城:2階"),
    (0x006F, "飢餓城:3階(スフインツクのフロア)"),
    (0x0070, "飢餓城:地下1階"),
    (0x0071, "飢餓城:3階"),
    (0x0072, "飢餓城:3階(ビッグカンカンからスフインツクの間の通路)"),
    (0x0073, "飢餓城:4階(ツタンだいおうのフロア)"),
    (0x0074, "飢餓城:ビッグカンカンのフロア"),
    (0x0076, "氷結城:左の塔2階"),
    (0x0077, "氷結城:左の塔3階"),
    (0x007B, "氷結城:5階(メガトンコインを持っていると落ちてしまうところ)"),
    (0x007C, "氷結城:だるまたいしのいるフロア"),
    (0x007D, "氷結城:右の塔1階"),
    (0x007E, "氷結城:右の塔3階"),
    (0x0083, "かぶとがに大明神:入り口の社"),
    (0x0084, "かぶとがに大明神:内部"),
    (0x0085, "安芸の町"),
    (0x0086, "伊予の町"),
    (0x0088, "伊予の町から土佐の町への地下道"),
    (0x0089, "宇宙(タコリアンのUFOでの移動画面)"),
    (0x008A, "つちのこ大明神"),
    (0x008B, "土佐の町(シードラゴン攻略前)"),
    (0x008D, "のろい城:地下1階"),
    (0x008E, "のろい城:1階(入ってすぐのフロア)"),
    (0x008F, "のろい城:1階"),
    (0x0090, "のろい城:3階(棺桶が多いフロア)・4階"),
    (0x0091, "のろい城:5階(ゾンビまおうのフロア)"),
    (0x0092, "のろい城:3階(牢屋のあるフロア)"),
    (0x0094, "のろい城:ゾンビマシン"),
    (0x0097, "岬の小屋(さばのすけのいるフロア)"),
    (0x0098, "呉別府の渡し"),
    (0x0099, "異人の町"),
    (0x009A, "隼人の渡し"),
    (0x00A2, "モンゴレンの町:あおいほんがあるフロア"),
    (0x00A5, "オーロラ村とアザラシ村の間の洞窟1"),
    (0x00A6, "黄金洞窟"),
    (0x00A8, "ゆきおとこ村北のガンちゃんで岩を退けるフロア"),
    (0x00A9, "浪速の都:越後屋の隠し通路部屋"),
    (0x00AC, "未来城:左の塔上層1階"),
    (0x00AD, "未来城:右の塔上層(最下層へ落下させられるフロア)"),
    (0x00AF, "隠れ湯"),
    (0x00B0, "富士山への地下通路"),
    (0x00B8, "未来城:パームロケットが貰える部屋"),
    (0x00BD, "ミロクの洞窟"),
    (0x00BE, "未来城:外観(入ってすぐのフロア)"),
    (0x00C0, "未来城:格納庫(床下パネルを調べながら進むフロアの途中にある上下に入り口のある部屋)"),
    (0x00C4, "未来城:左の塔下層(左の塔入ってすぐのフロア)"),
    (0x00C5, "未来城:左の塔最上階(ボスガンダー1のフロア)"),
    (0x00C9, "未来城:中央の橋(パームロケットを使うフロア)"),
    (0x00CA, "未来城:右の塔(上層から最下層への落下画面)"),
    (0x00CB, "未来城:右の塔最下層(ボスガンダー2のフロア)"),
    (0x00CF, "未来城:格納庫(ドールのカギを使い入ってすぐのフロア)"),
    (0x00D6, "未来城:格納庫(床下パネルを調べながら進むフロア)"),
    (0x00DC, "未来城:中央の塔(マインマスターのフロア)"),
    (0x00E0, "未来城:中央の塔(マインマスターのフロアのひとつ前のフロア)"),
    (0x00E1, "モモタロゾンビの城1階"),
    (0x00E2, "モモタロゾンビの城2階"),
    (0x00E3, "モモタロゾンビの城3階"),
    (0x00E5, "オーロラ村:王宮"),
    (0x00E6, "未来城:左の塔上層2階"),
    (0x00E7, "未来城:左の塔上層3階"),
    (0x00E8, "未来城:左の塔上層4階"),
    (0x00E9, "未来城:左の塔上層5階"),
    (0x00EA, "未来城:右の塔最上階"),
    (0x00EB, "未来城:右の塔最上階-1階"),
    (0x00EC, "ゆきおとこ村からクーラーの洞窟の間の洞窟"),
    (0x00ED, "ゆきおとこ村"),
    (0x00EE, "北の洞窟:入ってすぐのフロア"),
    (0x00EF, "北の洞窟:2番目のフロア"),
    (0x00F0, "オーロラ村"),
    (0x00F1, "モモタロゾンビの城4階"),
    (0x00F2, "モモタロゾンビの城5階"),
    (0x00F3, "クーラーの洞窟:入ってすぐのフロア"),
    (0x00F4, "クーラーの洞窟:メタルブロックのいるフロア"),
    (0x00F5, "隠れ湯:みかづきの部屋"),
    (0x00F6, "薩摩の町(火炎城攻略前)"),
    (0x00F7, "薩摩の町(かえんだいおう戦後)"),
    (0x00F8, "薩摩の町(かえんだいおう潜伏時)"),
    (0x00FC, "安芸の町:かごちゃんの部屋"),
    (0x00FD, "琉球の村"),
    (0x00FE, "琉球の村から火炎城への地下道"),
    (0x0100, "屋久島"),
    (0x0101, "屋久島:杉の子大明神"),
    (0x0102, "壱岐(天狗のいるフロア)"),
    (0x0103, "オロ島(シロのいるフロア)"),
    (0x0104, "門司の村"),
    (0x0105, "門司の村:鬼の涙を使う穴がある部屋"),
    (0x0106, "門司の村:鬼の涙を使うフロア"),
    (0x0107, "下関の村"),
    (0x010A, "黄泉の洞窟:入ってすぐのフロア"),
    (0x010C, "黄泉の洞窟:エイリアンドール跡地"),
    (0x010D, "カムカムの渡し"),
    (0x010E, "黄泉の洞窟:タコリアンのいるフロア"),
    (0x010F, "プーサンの村"),
    (0x0110, "暗闇城から黄泉の洞窟への地下通路"),
    (0x0111, "異星の廃都"),
    (0x0112, "長門の村"),
    (0x0113, "コンコンの町"),
    (0x0116, "ホルクロア:まがつたまがあるフロア"),
    (0x0117, "白ウサギ大明神"),
    (0x0118, "ジャンパイの町"),
    (0x011A, "ポキン"),
    (0x011C, "クーロン城:入ってすぐのフロア"),
    (0x011D, "クーロン城:地下牢"),
    (0x011E, "クーロン城:コスモトロンがあるフロア"),
    (0x011F, "ソウレンの村"),
    (0x0121, "シーサンプータ"),
    (0x0122, "三里の長城"),
    (0x0123, "モンゴレンの町"),
    (0x0125, "ハルビンタの村"),
    (0x0127, "からくり城(ワールドマップから入った場合;入り口が無い)"),
    (0x0128, "コウモリ洞窟(しんかげがあるフロア)"),
    (0x012A, "ウラジョスト"),
    (0x012C, "ババロフの町"),
    (0x012D, "青い石碑(ノルンのなみだを使うフロア)"),
    (0x012E, "最果ての洞窟(イワンの埋まっているフロア)"),
    (0x012F, "石狩の町"),
    (0x0130, "北の神々の祠"),
    (0x0131, "まりもの里"),
    (0x0133, "函館の村"),
    (0x0134, "りんご村"),
    (0x0135, "イタコ村"),
    (0x0137, "十和田の石碑"),
    (0x0138, "なんぶの町"),
    (0x013C, "氷結城:入り口"),
    (0x013D, "のろい城:入り口"),
    (0x013E, "あきんどタウン"),
    (0x013F, "ミミズク大明神"),
    (0x0140, "いけない渡し"),
    (0x0142, "あわの村"),
    (0x0143, "江戸の町"),
    (0x0146, "エンディング:マインマスター戦後のフロア"),
    (0x0147, "シバレンの村"),
    (0x0148, "のろい城:5階からゾンビマシンの間の移動"),
    (0x014D, "千里の長城"),
    (0x014E, "富士山"),
    (0x014F, "ホルクロア"),
    (0x0150, "薩摩の町の右下の火山"),
    (0x0152, "しろくま村"),
    (0x0156, "アザラシ村"),
    (0x0158, "シロ編エンディングのスギ"),
    (0x0159, "北の洞窟:ガンちゃんがいるフロア"),
    (0x015A, "ミミナリ島の祠1階"),
    (0x015B, "ミミナリ島の祠2階(キンタロゾンビのフロア)"),
    (0x015C, "トンカチ島の祠(チューリップ)"),
    (0x015D, "トンカチ島の祠(チューリップで転送後)"),
];

/// Caption of each entry of the world map terrain table, in table order
#[rustfmt::skip]
pub static WORLD_MAP_TILE_CAPTIONS: [&str; record::WORLD_MAP_TILE_COUNT] = [
    "ワールドマップ(森(木2本))",
    "ワールドマップ(森(木1本))",
    "ワールドマップ(??)",
    "ワールドマップ(雪木(木1本))",
    "ワールドマップ(山(茶色))",
    "ワールドマップ(岩山(1マス;進入不可))",
    "ワールドマップ(雪山(1マス;進入不可))",
    "ワールドマップ(平野(緑))",
    "ワールドマップ(橋(上から下))",
    "ワールドマップ(海(左側が橋の影;進入不可))",
    "ワールドマップ(橋(左から右))",
    "ワールドマップ(海(上側が橋の影;進入不可))",
    "ワールドマップ(沼(緑))",
    "ワールドマップ(水(岸なし;進入不可))",
    "ワールドマップ(水(上側が岸;進入不可))",
    "ワールドマップ(水(上側と左側が岸;進入不可))",
    "ワールドマップ(水(左側が岸;進入不可))",
    "ワールドマップ(??)",
    "ワールドマップ(水(下側が岸;進入不可))",
    "ワールドマップ(水(左側と下側が岸;進入不可))",
    "ワールドマップ(水(下側と右側が岸;進入不可))",
    "ワールドマップ(??)",
    "ワールドマップ(水(左側が岸;進入不可))",
    "ワールドマップ(水(右側が岸;進入不可))",
    "ワールドマップ(水(上側と下側が岸;進入不可))",
    "ワールドマップ(水(左側と右側が岸;進入不可))",
    "ワールドマップ(平野(緑;下側が岸))",
    "ワールドマップ(砂漠)",
    "ワールドマップ(??)",
    "ワールドマップ(ヤシの木)",
    "ワールドマップ(??)",
    "ワールドマップ(城壁(進入不可))",
    "ワールドマップ(スギ(2マスの上))",
    "ワールドマップ(雪原)",
    "ワールドマップ(スギ(2マスの下))",
    "ワールドマップ(雪原(下側が岸))",
    "ワールドマップ(岩山(2マスの左;進入不可))",
    "ワールドマップ(岩山(2マスの右;進入不可))",
    "ワールドマップ(町(2マス;左))",
    "ワールドマップ(町(2マス;右))",
    "ワールドマップ(洞窟(はしご))",
    "ワールドマップ(鳥居)",
    "ワールドマップ(町(1マス))",
    "ワールドマップ(氷結城(4マス;左上))",
    "ワールドマップ(氷結城(4マス;右上))",
    "ワールドマップ(氷結城(4マス;左下))",
    "ワールドマップ(氷結城(4マス;右下))",
    "ワールドマップ(火山・ピラミッド・呪い城(4マス;左上))",
    "ワールドマップ(火山・ピラミッド・呪い城(4マス;右上))",
    "ワールドマップ(火山・ピラミッド・呪い城(4マス;左下))",
    "ワールドマップ(火山・ピラミッド・呪い城(4マス;右下))",
    "ワールドマップ(町跡地)",
    "オニガランド(森(木1本))",
    "オニガランド(??)",
    "オニガランド(平野(茶))",
    "オニガランド(森(幹無し))",
    "オニガランド(森(木2本))",
    "オニガランド(平野(緑))",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(水(岸なし))",
    "オニガランド(水(上側が岸))",
    "オニガランド(水(上側と左側が岸))",
    "オニガランド(水(上側と右側が岸))",
    "オニガランド(??)",
    "オニガランド(水(下側が岸))",
    "オニガランド(水(左側と下側が岸))",
    "オニガランド(水(下側と右側が岸))",
    "オニガランド(??)",
    "オニガランド(水(左側が岸))",
    "オニガランド(水(右側が岸))",
    "オニガランド(水(上側と下側が岸))",
    "オニガランド(水(左側と右側が岸))",
    "オニガランド(平野(茶;下側が岸))",
    "オニガランド(トゲ)",
    "オニガランド(溶岩)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オニガランド(??)",
    "オーロラ王国(雪原)",
    "オーロラ王国(雪原(下側が岸))",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(土)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(土(下側が岸))",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(階段)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
    "オーロラ王国(??)",
];

/// Description of `map_id`, empty when the map is undocumented
pub fn map_description(map_id: u16) -> &'static str {
    MAP_DESCRIPTIONS
        .binary_search_by_key(&map_id, |&(id, _)| id)
        .map(|index| MAP_DESCRIPTIONS[index].1)
        .unwrap_or("")
}

pub fn tile_caption(index: usize) -> Option<&'static str> {
    WORLD_MAP_TILE_CAPTIONS.get(index).copied()
}
