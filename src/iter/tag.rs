//! Capability tags
//!
//! A tag is a zero-sized type naming where a range lives (host or device) and
//! how it may be traversed. Tags carry no state; they only exist so the
//! dispatch traits in [`crate::ops::traits`] can be implemented per
//! capability and resolved at compile time.

use std::fmt;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Where a range's elements live
pub trait ExecutionSpace: sealed::Sealed + Copy + Default + Send + Sync + 'static {
    /// Human-readable name of this space
    const NAME: &'static str;
}

/// How a range may be traversed
pub trait TraversalCategory: sealed::Sealed + Copy + Default + Send + Sync + 'static {
    /// Human-readable name of this category
    const NAME: &'static str;
    /// Whether elements may be visited in any order
    const RANDOM_ACCESS: bool;
}

/// Elements live in host memory
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HostSpace;

/// Elements live in device memory
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeviceSpace;

/// Single pass, front to back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ForwardTraversal;

/// Front to back or back to front
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTraversal;

/// Any element, any order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTraversal;

impl sealed::Sealed for HostSpace {}
impl sealed::Sealed for DeviceSpace {}
impl sealed::Sealed for ForwardTraversal {}
impl sealed::Sealed for BidirectionalTraversal {}
impl sealed::Sealed for RandomAccessTraversal {}

impl ExecutionSpace for HostSpace {
    const NAME: &'static str = "host";
}

impl ExecutionSpace for DeviceSpace {
    const NAME: &'static str = "device";
}

impl TraversalCategory for ForwardTraversal {
    const NAME: &'static str = "forward";
    const RANDOM_ACCESS: bool = false;
}

impl TraversalCategory for BidirectionalTraversal {
    const NAME: &'static str = "bidirectional";
    const RANDOM_ACCESS: bool = false;
}

impl TraversalCategory for RandomAccessTraversal {
    const NAME: &'static str = "random_access";
    const RANDOM_ACCESS: bool = true;
}

/// Tag identifying an execution space and traversal category
pub struct IteratorTag<S, C> {
    _marker: PhantomData<fn() -> (S, C)>,
}

impl<S: ExecutionSpace, C: TraversalCategory> IteratorTag<S, C> {
    /// Create the tag value
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Name of the execution space
    pub fn space_name() -> &'static str {
        S::NAME
    }

    /// Name of the traversal category
    pub fn traversal_name() -> &'static str {
        C::NAME
    }
}

impl<S, C> Clone for IteratorTag<S, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, C> Copy for IteratorTag<S, C> {}

impl<S: ExecutionSpace, C: TraversalCategory> Default for IteratorTag<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ExecutionSpace, C: TraversalCategory> fmt::Debug for IteratorTag<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IteratorTag<{}, {}>", S::NAME, C::NAME)
    }
}

/// Common view over every [`IteratorTag`]
pub trait Tag: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Execution space
    type Space: ExecutionSpace;
    /// Traversal category
    type Traversal: TraversalCategory;
}

impl<S: ExecutionSpace, C: TraversalCategory> Tag for IteratorTag<S, C> {
    type Space = S;
    type Traversal = C;
}

/// Forward host range
pub type ForwardHostTag = IteratorTag<HostSpace, ForwardTraversal>;
/// Bidirectional host range
pub type BidirectionalHostTag = IteratorTag<HostSpace, BidirectionalTraversal>;
/// Random-access host range
pub type RandomAccessHostTag = IteratorTag<HostSpace, RandomAccessTraversal>;
/// Forward device range
pub type ForwardDeviceTag = IteratorTag<DeviceSpace, ForwardTraversal>;
/// Bidirectional device range
pub type BidirectionalDeviceTag = IteratorTag<DeviceSpace, BidirectionalTraversal>;
/// Random-access device range
pub type RandomAccessDeviceTag = IteratorTag<DeviceSpace, RandomAccessTraversal>;
