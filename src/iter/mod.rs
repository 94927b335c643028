mod mut_iter;
mod owned_iter;
mod ref_iter;

pub use mut_iter::IterMut;
pub use owned_iter::OwnedIter;
pub use ref_iter::Iter;
