use crate::Cell;

/// Manhattan distance. Admissible and consistent on a 4-connected grid with
/// unit step cost.
pub fn manhattan(a: Cell, b: Cell) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_distance() {
        assert_eq!(manhattan(Cell(1, 1), Cell(1, 8)), 7);
        assert_eq!(manhattan(Cell(3, 8), Cell(1, 1)), 9);
        assert_eq!(manhattan(Cell(1, 8), Cell(3, 1)), 9);
        assert_eq!(manhattan(Cell(4, 4), Cell(4, 4)), 0);
    }
}
