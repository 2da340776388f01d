//! Row-access traits shared by the single-channel planes.
//!
//! Filters iterate rows rather than pixels where possible; clamped border
//! handling in the filter code relies on `row` returning exactly `width`
//! samples.

pub trait PlaneView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn as_slice(&self) -> &[Self::Pixel];
}

pub trait PlaneViewMut: PlaneView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    fn as_mut_slice(&mut self) -> &mut [Self::Pixel];
}
