/// Walk every combination of `k` elements of `items`, invoking the callback
/// with each one. Elements keep their input order within a combination, so
/// combinations of a sorted slice come out sorted.
pub fn for_each_combination<I, F>(items: &[I], k: usize, callback: &mut F)
where
    I: Clone,
    F: FnMut(&[I]),
{
    if k == 0 || k > items.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    combine_recursive(items, k, 0, &mut current, callback);
}

fn combine_recursive<I, F>(
    items: &[I],
    k: usize,
    start: usize,
    current: &mut Vec<I>,
    callback: &mut F,
) where
    I: Clone,
    F: FnMut(&[I]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i].clone());
        combine_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
