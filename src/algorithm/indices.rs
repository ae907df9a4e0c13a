use std::ops::Range;

index_vec::define_index_type! {
    pub struct TokenIndex = usize;
}

pub(super) fn range_iter(range: Range<TokenIndex>) -> impl Iterator<Item = TokenIndex> {
    (range.start.raw()..range.end.raw()).map(TokenIndex::new)
}

#[cfg(test)]
mod test {
    use super::{range_iter, TokenIndex};

    #[test]
    fn iterates_half_open_range() {
        let indices: Vec<_> = range_iter(TokenIndex::new(2)..TokenIndex::new(5)).collect();
        assert_eq!(indices, vec![TokenIndex::new(2), TokenIndex::new(3), TokenIndex::new(4)]);
    }

    #[test]
    fn empty_range() {
        assert_eq!(range_iter(TokenIndex::new(3)..TokenIndex::new(3)).count(), 0);
    }
}
