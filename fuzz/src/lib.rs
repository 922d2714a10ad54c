/// Reinterprets the fuzzer input as little endian `i32` values, trailing bytes are ignored.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Pairs every value with its index, sorting by the value alone must keep the indices of equal
/// values ascending for a stable sort.
pub fn with_index(v: Vec<i32>) -> Vec<(i32, usize)> {
    v.into_iter().enumerate().map(|(i, val)| (val, i)).collect()
}
