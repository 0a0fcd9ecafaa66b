use serde::{Deserialize, Serialize};

/// 中央格（N 欄第 3 列）固定為 0
pub const FREE_CELL: u8 = 0;

pub const GRID_SIZE: usize = 5;

pub const CENTER: usize = 2;

/// 排除中央格後的數字個數
pub const SIGNATURE_LEN: usize = GRID_SIZE * GRID_SIZE - 1;

/// A 5x5 grid stored column-major: `columns[0]` is B, `columns[4]` is O.
pub type Grid = [[u8; GRID_SIZE]; GRID_SIZE];

/// A built card that has not been accepted into a collection yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftCard {
    pub columns: Grid,
    pub user_id: String,
}

impl DraftCard {
    /// Sorted non-free values; two cards with equal signatures hold the same numbers.
    pub fn signature(&self) -> CardSignature {
        let mut values = [0u8; SIGNATURE_LEN];
        let mut next = 0;
        for (col, column) in self.columns.iter().enumerate() {
            for (row, value) in column.iter().enumerate() {
                if col == CENTER && row == CENTER {
                    continue;
                }
                values[next] = *value;
                next += 1;
            }
        }
        values.sort_unstable();
        CardSignature(values)
    }

    pub fn into_card(self, card_id: String) -> Card {
        let [b, i, n, g, o] = self.columns;
        Card {
            b1: b[0],
            b2: b[1],
            b3: b[2],
            b4: b[3],
            b5: b[4],
            i1: i[0],
            i2: i[1],
            i3: i[2],
            i4: i[3],
            i5: i[4],
            n1: n[0],
            n2: n[1],
            n3: n[2],
            n4: n[3],
            n5: n[4],
            g1: g[0],
            g2: g[1],
            g3: g[2],
            g4: g[3],
            g5: g[4],
            o1: o[0],
            o2: o[1],
            o3: o[2],
            o4: o[3],
            o5: o[4],
            user_id: self.user_id,
            card_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardSignature(pub [u8; SIGNATURE_LEN]);

/// One card as it appears in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Card {
    pub b1: u8,
    pub b2: u8,
    pub b3: u8,
    pub b4: u8,
    pub b5: u8,
    pub i1: u8,
    pub i2: u8,
    pub i3: u8,
    pub i4: u8,
    pub i5: u8,
    pub n1: u8,
    pub n2: u8,
    pub n3: u8,
    pub n4: u8,
    pub n5: u8,
    pub g1: u8,
    pub g2: u8,
    pub g3: u8,
    pub g4: u8,
    pub g5: u8,
    pub o1: u8,
    pub o2: u8,
    pub o3: u8,
    pub o4: u8,
    pub o5: u8,
    pub user_id: String,
    pub card_id: String,
}

impl Card {
    pub fn columns(&self) -> Grid {
        [
            [self.b1, self.b2, self.b3, self.b4, self.b5],
            [self.i1, self.i2, self.i3, self.i4, self.i5],
            [self.n1, self.n2, self.n3, self.n4, self.n5],
            [self.g1, self.g2, self.g3, self.g4, self.g5],
            [self.o1, self.o2, self.o3, self.o4, self.o5],
        ]
    }

    pub fn signature(&self) -> CardSignature {
        DraftCard {
            columns: self.columns(),
            user_id: String::new(),
        }
        .signature()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    pub cards: Vec<Card>,
}

impl CardCollection {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// 產生過程的統計，用於日誌
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub accepted: usize,
    pub attempts: u64,
    pub duplicates: u64,
}
