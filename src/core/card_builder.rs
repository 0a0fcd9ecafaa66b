use crate::core::sampler::{range_width, sample_column};
use crate::domain::model::{DraftCard, Grid, CENTER, FREE_CELL, GRID_SIZE};
use crate::utils::error::{CardGenError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub letter: char,
    pub min: u8,
    pub max: u8,
    pub count: usize,
}

impl ColumnSpec {
    pub const fn new(letter: char, min: u8, max: u8, count: usize) -> Self {
        Self {
            letter,
            min,
            max,
            count,
        }
    }
}

/// 標準 75 球賓果：B 1-15、I 16-30、N 31-45（只抽 4 個）、G 46-60、O 61-75
pub const BINGO_COLUMNS: [ColumnSpec; GRID_SIZE] = [
    ColumnSpec::new('B', 1, 15, 5),
    ColumnSpec::new('I', 16, 30, 5),
    ColumnSpec::new('N', 31, 45, 4),
    ColumnSpec::new('G', 46, 60, 5),
    ColumnSpec::new('O', 61, 75, 5),
];

/// Builds single cards for one owner from a validated column layout.
#[derive(Debug, Clone)]
pub struct CardBuilder {
    columns: [ColumnSpec; GRID_SIZE],
    user_id: String,
}

impl CardBuilder {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            columns: BINGO_COLUMNS,
            user_id: user_id.into(),
        }
    }

    /// Uses a custom layout. Every column must be able to fill its cells from
    /// its own range, the middle column draws one value fewer for the free
    /// cell, and ranges may not overlap each other or the free value.
    pub fn with_columns(user_id: impl Into<String>, columns: [ColumnSpec; GRID_SIZE]) -> Result<Self> {
        validate_layout(&columns)?;
        Ok(Self {
            columns,
            user_id: user_id.into(),
        })
    }

    pub fn columns(&self) -> &[ColumnSpec; GRID_SIZE] {
        &self.columns
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DraftCard> {
        let mut grid: Grid = [[FREE_CELL; GRID_SIZE]; GRID_SIZE];

        for (col, spec) in self.columns.iter().enumerate() {
            let mut values = sample_column(rng, spec.min, spec.max, spec.count)?;
            values.shuffle(rng);

            if col == CENTER {
                // 四個數字填入第 1、2、4、5 列，中央維持 FREE_CELL
                let rows = (0..GRID_SIZE).filter(|row| *row != CENTER);
                for (row, value) in rows.zip(values) {
                    grid[col][row] = value;
                }
            } else {
                grid[col].copy_from_slice(&values);
            }
        }

        Ok(DraftCard {
            columns: grid,
            user_id: self.user_id.clone(),
        })
    }
}

pub fn validate_layout(columns: &[ColumnSpec; GRID_SIZE]) -> Result<()> {
    for (col, spec) in columns.iter().enumerate() {
        let expected = if col == CENTER { GRID_SIZE - 1 } else { GRID_SIZE };
        if spec.count != expected {
            return Err(CardGenError::InvalidLayout {
                column: spec.letter,
                reason: format!("draws {} values, expected {}", spec.count, expected),
            });
        }

        if (spec.min..=spec.max).contains(&FREE_CELL) {
            return Err(CardGenError::InvalidLayout {
                column: spec.letter,
                reason: format!("range must not contain the free value {}", FREE_CELL),
            });
        }

        if spec.count > range_width(spec.min, spec.max) {
            return Err(CardGenError::InvalidSample {
                min: spec.min,
                max: spec.max,
                count: spec.count,
            });
        }

        for other in &columns[..col] {
            if spec.min <= other.max && other.min <= spec.max {
                return Err(CardGenError::InvalidLayout {
                    column: spec.letter,
                    reason: format!("range overlaps column {}", other.letter),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_layout_is_valid() {
        assert!(validate_layout(&BINGO_COLUMNS).is_ok());
    }

    #[test]
    fn test_build_card_structure() {
        let builder = CardBuilder::new("owner-1");
        assert_eq!(builder.columns(), &BINGO_COLUMNS);
        assert_eq!(builder.user_id(), "owner-1");
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..100 {
            let draft = builder.build(&mut rng).unwrap();
            assert_eq!(draft.user_id, "owner-1");
            assert_eq!(draft.columns[CENTER][CENTER], FREE_CELL);

            let mut seen = HashSet::new();
            for (col, spec) in BINGO_COLUMNS.iter().enumerate() {
                for (row, value) in draft.columns[col].iter().enumerate() {
                    if col == CENTER && row == CENTER {
                        continue;
                    }
                    assert!(
                        (spec.min..=spec.max).contains(value),
                        "{}{} = {} out of range",
                        spec.letter,
                        row + 1,
                        value
                    );
                    assert!(seen.insert(*value), "duplicate value {}", value);
                }
            }
            assert_eq!(seen.len(), 24);
        }
    }

    #[test]
    fn test_custom_layout_rejects_wrong_counts() {
        let mut columns = BINGO_COLUMNS;
        columns[2].count = 5;
        let err = CardBuilder::with_columns("owner", columns).unwrap_err();
        assert!(matches!(err, CardGenError::InvalidLayout { column: 'N', .. }));
    }

    #[test]
    fn test_custom_layout_rejects_small_range() {
        let mut columns = BINGO_COLUMNS;
        columns[0].max = 4;
        let err = CardBuilder::with_columns("owner", columns).unwrap_err();
        assert!(matches!(err, CardGenError::InvalidSample { count: 5, .. }));
    }

    #[test]
    fn test_custom_layout_rejects_overlap_and_free_value() {
        let mut overlapping = BINGO_COLUMNS;
        overlapping[1].min = 15;
        assert!(matches!(
            CardBuilder::with_columns("owner", overlapping),
            Err(CardGenError::InvalidLayout { column: 'I', .. })
        ));

        let mut with_zero = BINGO_COLUMNS;
        with_zero[0].min = 0;
        assert!(CardBuilder::with_columns("owner", with_zero).is_err());
    }

    #[test]
    fn test_exact_size_layout_builds() {
        let columns = [
            ColumnSpec::new('B', 1, 5, 5),
            ColumnSpec::new('I', 6, 10, 5),
            ColumnSpec::new('N', 11, 14, 4),
            ColumnSpec::new('G', 15, 19, 5),
            ColumnSpec::new('O', 20, 24, 5),
        ];
        let builder = CardBuilder::with_columns("owner", columns).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let draft = builder.build(&mut rng).unwrap();

        let mut values: Vec<u8> = draft.signature().0.to_vec();
        values.sort_unstable();
        assert_eq!(values, (1..=24).collect::<Vec<u8>>());
    }
}
