use crate::errors::SGError;

///
/// Multi-index set of the Smolyak combination for dimension `ndim` and total
/// level `level`: every `ndim`-tuple with components in [1, level+ndim] whose
/// component sum s satisfies level+1 <= s <= level+ndim. Indices are returned
/// flattened in lexicographic order; consume with `chunks_exact(ndim)`.
///
pub fn index_set(ndim: usize, level: u32) -> Result<Vec<u32>, SGError>
{
    if ndim == 0
    {
        return Err(SGError::InvalidDimension);
    }
    if level == 0
    {
        return Err(SGError::InvalidLevel);
    }
    let bound = level as usize + ndim;
    let total_combinations = bound.pow(ndim as u32);
    let mut indices = Vec::new();
    let mut current = vec![0_u32; ndim];
    for i in 0..total_combinations
    {
        let mut index = i;
        for j in (0..ndim).rev()
        {
            current[j] = (index % bound) as u32 + 1;
            index /= bound;
        }
        let sum = current.iter().sum::<u32>();
        if level + 1 <= sum && sum <= level + ndim as u32
        {
            indices.extend_from_slice(&current);
        }
    }
    Ok(indices)
}

#[test]
fn check_one_dimensional_set()
{
    // in one dimension only the index summing to level+1 survives
    for level in 1..=6
    {
        assert_eq!(index_set(1, level).unwrap(), vec![level + 1]);
    }
}

#[test]
fn check_two_dimensional_set()
{
    let indices = index_set(2, 3).unwrap();
    let tuples: Vec<&[u32]> = indices.chunks_exact(2).collect();
    assert_eq!(tuples.len(), 7);
    assert_eq!(tuples, vec![
        &[1, 3][..], &[1, 4][..], &[2, 2][..], &[2, 3][..], &[3, 1][..], &[3, 2][..], &[4, 1][..],
    ]);
}

#[test]
fn check_sum_bounds()
{
    let level = 2;
    let ndim = 3;
    let indices = index_set(ndim, level).unwrap();
    for idx in indices.chunks_exact(ndim)
    {
        let sum = idx.iter().sum::<u32>();
        assert!(level + 1 <= sum && sum <= level + ndim as u32);
        assert!(idx.iter().all(|&i| i >= 1));
    }
}

#[test]
fn check_invalid_arguments()
{
    assert_eq!(index_set(0, 3).err(), Some(SGError::InvalidDimension));
    assert_eq!(index_set(2, 0).err(), Some(SGError::InvalidLevel));
}
