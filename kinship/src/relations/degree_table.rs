//! Generic degree-of-kinship reference grid

use crate::relations::title::title_for_distance;

pub const DEFAULT_MAX_DEGREE: u32 = 4;

/// `(max_degree + 1)²` grid of gender-neutral titles, indexed `[up][down]`.
pub fn degree_table(max_degree: u32) -> Vec<Vec<String>> {
    (0..=max_degree)
        .map(|up| {
            (0..=max_degree)
                .map(|down| title_for_distance(up, down).render(None))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let grid = degree_table(DEFAULT_MAX_DEGREE);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 5));
        assert_eq!(grid[0][0], "self");
        assert_eq!(grid[4][4], "third cousin");
    }

    #[test]
    fn test_anchor_cells_stable_across_sizes() {
        for max in 2..=8 {
            let grid = degree_table(max);
            assert_eq!(grid[1][0], "parent");
            assert_eq!(grid[0][1], "child");
            assert_eq!(grid[1][1], "sibling");
            assert_eq!(grid[2][2], "cousin");
        }
    }

    #[test]
    fn test_extended_grid_falls_back() {
        let grid = degree_table(6);
        assert_eq!(grid[5][5], "4th cousin");
        assert_eq!(grid[6][1], "6 generations up");
        assert_eq!(grid[0][5], "5 generations down");
    }

    #[test]
    fn test_zero_degree() {
        assert_eq!(degree_table(0), vec![vec!["self".to_string()]]);
    }
}
