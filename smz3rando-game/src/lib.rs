use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, VariantNames};

/// Game-defined location identifier. Zelda locations are offset by 256.
pub type LocationId = usize;
/// Index of a location within its world's location arena.
pub type LocationIdx = usize;
pub type WorldId = usize;

pub const ZELDA_LOCATION_OFFSET: LocationId = 256;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, VariantNames)]
pub enum Game {
    Zelda,
    Metroid,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, VariantNames)]
pub enum ItemCategory {
    Zelda,
    Metroid,
    SmallKey,
    BigKey,
    Map,
    Compass,
    Keycard,
    Medallion,
    Bottle,
    /// Items which have no effect on logic.
    Scam,
    Nice,
    Junk,
    /// Items with enough copies that a few can be swapped out without affecting balance.
    Plentiful,
    /// Item types which are never placed by the randomizer.
    NonRandomized,
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    TryFromPrimitive,
    Serialize,
    Deserialize,
    PartialOrd,
    Ord,
)]
#[repr(usize)]
// Note: the ordering is used for dense per-type counters; `Nothing` must stay last.
pub enum ItemType {
    MapHC,
    MapEP,
    MapDP,
    MapTH,
    MapPD,
    MapSP,
    MapSW,
    MapTT,
    MapIP,
    MapMM,
    MapTR,
    MapGT,

    CompassEP,
    CompassDP,
    CompassTH,
    CompassPD,
    CompassSP,
    CompassSW,
    CompassTT,
    CompassIP,
    CompassMM,
    CompassTR,
    CompassGT,

    BigKeyEP,
    BigKeyDP,
    BigKeyTH,
    BigKeyPD,
    BigKeySP,
    BigKeySW,
    BigKeyTT,
    BigKeyIP,
    BigKeyMM,
    BigKeyTR,
    BigKeyGT,

    KeyHC,
    KeyCT,
    KeyDP,
    KeyTH,
    KeyPD,
    KeySP,
    KeySW,
    KeyTT,
    KeyIP,
    KeyMM,
    KeyTR,
    KeyGT,

    Key,
    Compass,
    BigKey,
    Map,

    ProgressiveTunic,
    ProgressiveShield,
    ProgressiveSword,
    Bow,
    SilverArrows,
    BlueBoomerang,
    RedBoomerang,
    Hookshot,
    Mushroom,
    Powder,
    Firerod,
    Icerod,
    Bombos,
    Ether,
    Quake,
    Lamp,
    Hammer,
    Shovel,
    Flute,
    Bugnet,
    Book,
    Bottle,
    Somaria,
    Byrna,
    Cape,
    Mirror,
    Boots,
    ProgressiveGlove,
    Flippers,
    MoonPearl,
    HalfMagic,
    HeartPiece,
    HeartContainer,
    HeartContainerRefill,
    ThreeBombs,
    Arrow,
    TenArrows,
    OneRupee,
    FiveRupees,
    TwentyRupees,
    TwentyRupees2,
    FiftyRupees,
    OneHundredRupees,
    ThreeHundredRupees,
    BombUpgrade5,
    BombUpgrade10,
    ArrowUpgrade5,
    ArrowUpgrade10,

    BottleWithRedPotion,
    BottleWithGreenPotion,
    BottleWithBluePotion,
    BottleWithFairy,
    BottleWithBee,
    BottleWithGoldBee,

    CardCrateriaL1,
    CardCrateriaL2,
    CardCrateriaBoss,
    CardBrinstarL1,
    CardBrinstarL2,
    CardBrinstarBoss,
    CardNorfairL1,
    CardNorfairL2,
    CardNorfairBoss,
    CardMaridiaL1,
    CardMaridiaL2,
    CardMaridiaBoss,
    CardWreckedShipL1,
    CardWreckedShipBoss,
    CardLowerNorfairL1,
    CardLowerNorfairBoss,

    Missile,
    Super,
    PowerBomb,
    Grapple,
    XRay,
    ETank,
    ReserveTank,
    Charge,
    Ice,
    Wave,
    Spazer,
    Plasma,
    Varia,
    Gravity,
    Morph,
    Bombs,
    SpringBall,
    ScrewAttack,
    HiJump,
    SpaceJump,
    SpeedBooster,

    Nothing,
}

pub const NUM_ITEM_TYPES: usize = ItemType::Nothing as usize + 1;

impl ItemType {
    pub fn categories(self) -> &'static [ItemCategory] {
        use ItemCategory as C;
        use ItemType::*;
        match self {
            MapHC | MapEP | MapDP | MapTH | MapPD | MapSP | MapSW | MapTT | MapIP | MapMM
            | MapTR | MapGT => &[C::Zelda, C::Map],
            CompassEP | CompassDP | CompassTH | CompassPD | CompassSP | CompassSW | CompassTT
            | CompassIP | CompassMM | CompassTR | CompassGT => &[C::Zelda, C::Compass],
            BigKeyEP | BigKeyDP | BigKeyTH | BigKeyPD | BigKeySP | BigKeySW | BigKeyTT
            | BigKeyIP | BigKeyMM | BigKeyTR | BigKeyGT => &[C::Zelda, C::BigKey],
            KeyHC | KeyCT | KeyDP | KeyTH | KeyPD | KeySP | KeySW | KeyTT | KeyIP | KeyMM
            | KeyTR | KeyGT => &[C::Zelda, C::SmallKey],
            Key => &[C::Zelda, C::SmallKey],
            Compass => &[C::Zelda, C::Compass],
            BigKey => &[C::Zelda, C::BigKey],
            Map => &[C::Zelda, C::Map],

            ProgressiveTunic | SilverArrows => &[C::Zelda, C::Nice],
            ProgressiveShield | BlueBoomerang | RedBoomerang | Mushroom | Powder | Bugnet
            | Bottle | HeartContainerRefill => &[C::Zelda, C::Scam],
            Bombos | Ether | Quake => &[C::Zelda, C::Medallion],
            ProgressiveSword | Bow | Hookshot | Firerod | Icerod | Lamp | Hammer | Shovel
            | Flute | Book | Somaria | Byrna | Cape | Mirror | Boots | ProgressiveGlove
            | Flippers | MoonPearl | HalfMagic => &[C::Zelda],
            HeartPiece | ThreeBombs | TwentyRupees => {
                &[C::Zelda, C::Scam, C::Junk, C::Plentiful]
            }
            HeartContainer | Arrow | TenArrows | OneRupee | FiveRupees | TwentyRupees2
            | FiftyRupees | OneHundredRupees | ThreeHundredRupees | BombUpgrade5
            | BombUpgrade10 | ArrowUpgrade5 | ArrowUpgrade10 => &[C::Zelda, C::Scam, C::Junk],

            BottleWithRedPotion | BottleWithGreenPotion | BottleWithBluePotion
            | BottleWithFairy | BottleWithBee | BottleWithGoldBee => {
                &[C::Zelda, C::Bottle, C::NonRandomized]
            }

            CardCrateriaL1 | CardCrateriaL2 | CardCrateriaBoss | CardBrinstarL1
            | CardBrinstarL2 | CardBrinstarBoss | CardNorfairL1 | CardNorfairL2
            | CardNorfairBoss | CardMaridiaL1 | CardMaridiaL2 | CardMaridiaBoss
            | CardWreckedShipL1 | CardWreckedShipBoss | CardLowerNorfairL1
            | CardLowerNorfairBoss => &[C::Metroid, C::Keycard],

            Missile | Super => &[C::Metroid, C::Scam, C::Junk, C::Plentiful],
            PowerBomb | ETank | ReserveTank => &[C::Metroid, C::Scam, C::Junk],
            XRay => &[C::Metroid, C::Scam],
            Spazer => &[C::Metroid, C::Nice],
            Grapple | Charge | Ice | Wave | Plasma | Varia | Gravity | Morph | Bombs
            | SpringBall | ScrewAttack | HiJump | SpaceJump | SpeedBooster => &[C::Metroid],

            Nothing => &[C::NonRandomized],
        }
    }

    pub fn is_in_category(self, category: ItemCategory) -> bool {
        self.categories().contains(&category)
    }

    pub fn game(self) -> Option<Game> {
        if self.is_in_category(ItemCategory::Zelda) {
            Some(Game::Zelda)
        } else if self.is_in_category(ItemCategory::Metroid) {
            Some(Game::Metroid)
        } else {
            None
        }
    }

    pub fn is_dungeon_item(self) -> bool {
        self.categories().iter().any(|c| {
            matches!(
                c,
                ItemCategory::SmallKey
                    | ItemCategory::BigKey
                    | ItemCategory::Map
                    | ItemCategory::Compass
            )
        })
    }

    pub fn is_key(self) -> bool {
        self.is_in_category(ItemCategory::SmallKey)
    }

    pub fn is_big_key(self) -> bool {
        self.is_in_category(ItemCategory::BigKey)
    }

    pub fn is_map(self) -> bool {
        self.is_in_category(ItemCategory::Map)
    }

    pub fn is_compass(self) -> bool {
        self.is_in_category(ItemCategory::Compass)
    }

    pub fn is_keycard(self) -> bool {
        self.is_in_category(ItemCategory::Keycard)
    }

    pub fn is_medallion(self) -> bool {
        self.is_in_category(ItemCategory::Medallion)
    }

    pub fn all() -> impl Iterator<Item = ItemType> {
        (0..NUM_ITEM_TYPES).filter_map(|i| ItemType::try_from(i).ok())
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(usize)]
pub enum RewardType {
    None,
    Agahnim,
    PendantGreen,
    PendantRed,
    PendantBlue,
    CrystalBlue,
    CrystalRed,
    MetroidBoss,
}

pub const NUM_REWARD_TYPES: usize = RewardType::MetroidBoss as usize + 1;

impl RewardType {
    pub fn is_pendant(self) -> bool {
        matches!(
            self,
            RewardType::PendantGreen | RewardType::PendantRed | RewardType::PendantBlue
        )
    }

    pub fn is_crystal(self) -> bool {
        matches!(self, RewardType::CrystalBlue | RewardType::CrystalRed)
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(usize)]
pub enum BossType {
    Kraid,
    Phantoon,
    Draygon,
    Ridley,
    Agahnim,
    ArmosKnights,
    Lanmolas,
    Moldorm,
    HelmasaurKing,
    Arrghus,
    Mothula,
    Blind,
    Kholdstare,
    Vitreous,
    Trinexx,
}

pub const NUM_BOSS_TYPES: usize = BossType::Trinexx as usize + 1;

impl BossType {
    pub fn is_metroid_boss(self) -> bool {
        matches!(
            self,
            BossType::Kraid | BossType::Phantoon | BossType::Draygon | BossType::Ridley
        )
    }
}

pub const METROID_BOSSES: [BossType; 4] = [
    BossType::Kraid,
    BossType::Phantoon,
    BossType::Draygon,
    BossType::Ridley,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn item_type_indices_are_dense() {
        assert_eq!(ItemType::all().count(), NUM_ITEM_TYPES);
        assert_eq!(ItemType::try_from(0usize).ok(), Some(ItemType::MapHC));
    }

    #[test]
    fn dungeon_item_categories() {
        assert!(ItemType::KeyPD.is_dungeon_item());
        assert!(ItemType::BigKeyGT.is_big_key());
        assert!(ItemType::MapHC.is_map());
        assert!(!ItemType::CardBrinstarL1.is_dungeon_item());
        assert!(ItemType::CardBrinstarL1.is_keycard());
        assert_eq!(ItemType::Morph.game(), Some(Game::Metroid));
        assert_eq!(ItemType::Nothing.game(), None);
    }

    #[test]
    fn parse_from_string() {
        assert_eq!(ItemType::from_str("ProgressiveSword"), Ok(ItemType::ProgressiveSword));
        assert!(ItemType::from_str("NotAnItem").is_err());
    }
}
