pub const MIN_DIMENSION: usize = 5;
pub const MAX_DIMENSION: usize = 51;
pub const DEFAULT_DIMENSION: usize = 21;

pub fn is_valid_dimension(value: usize) -> bool {
    value % 2 == 1 && (MIN_DIMENSION..=MAX_DIMENSION).contains(&value)
}
