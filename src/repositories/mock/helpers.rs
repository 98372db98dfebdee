use super::{RepositoryError, Result as RepoResult};

/// Position of the single element matching `predicate`.
fn unique_index<T, P>(v: &[T], mut predicate: P) -> RepoResult<usize>
where P: FnMut(&T) -> bool {
    let mut hits = v
        .iter()
        .enumerate()
        .filter(|(_, t)| predicate(*t))
        .map(|(i, _)| i);

    let first = hits.next().ok_or(RepositoryError::NotFound)?;
    let others = hits.count();

    tracing::trace!(index = first, others, "in-memory lookup");

    match others {
        0 => Ok(first),
        n => Err(RepositoryError::NoUnique {
            matched: n as u32 + 1,
        }),
    }
}

pub fn find_mut<T, P>(v: &mut [T], predicate: P) -> RepoResult<&mut T>
where P: FnMut(&T) -> bool {
    let at = unique_index(v, predicate)?;
    Ok(&mut v[at])
}

pub fn find_ref<T, P>(v: &[T], predicate: P) -> RepoResult<&T>
where P: FnMut(&T) -> bool {
    unique_index(v, predicate).map(|at| &v[at])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_needs_exactly_one_match() {
        let mut v = vec![1, 2, 2];

        assert_eq!(*find_ref(&v, |n| *n == 1).unwrap(), 1);
        assert!(matches!(find_ref(&v, |n| *n == 9), Err(RepositoryError::NotFound)));
        assert!(matches!(
            find_mut(&mut v, |n| *n == 2),
            Err(RepositoryError::NoUnique { matched: 2 })
        ));

        *find_mut(&mut v, |n| *n == 1).unwrap() = 5;
        assert_eq!(v, [5, 2, 2]);
    }
}
