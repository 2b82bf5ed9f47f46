use std::{
	fmt,
	ops::{Add, AddAssign, Sub},
};

use num_traits::AsPrimitive;

pub type LatticePoint = Point<i32>;
pub type LatticeVector = Vector<i32>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vector<T> {
	pub x: T,
	pub y: T,
}

impl<T> Vector<T> {
	pub const fn new(x: T, y: T) -> Self {
		Vector { x, y }
	}

	/// The Euclidean length of the vector, computed in `f64` so that integer
	/// components cannot overflow.
	pub fn length(self) -> f64
	where
		T: AsPrimitive<f64>,
	{
		self.x.as_().hypot(self.y.as_())
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point<T> {
	pub x: T,
	pub y: T,
}

impl<T> Point<T> {
	pub const fn new(x: T, y: T) -> Self {
		Point { x, y }
	}

	/// The straight-line distance between `self` and `other`.
	pub fn distance(self, other: Self) -> f64
	where
		T: AsPrimitive<f64>,
	{
		// Subtract in f64 rather than T to stay clear of integer overflow.
		let offset = Vector::new(
			self.x.as_() - other.x.as_(),
			self.y.as_() - other.y.as_(),
		);
		offset.length()
	}
}

impl<T: AddAssign<T>> AddAssign<Vector<T>> for Point<T> {
	fn add_assign(&mut self, rhs: Vector<T>) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl<T: Add<Output = T>> Add<Vector<T>> for Point<T> {
	type Output = Self;

	fn add(self, rhs: Vector<T>) -> Self {
		Self {
			x: self.x + rhs.x,
			y: self.y + rhs.y,
		}
	}
}

impl<T: Sub<Output = T>> Sub for Point<T> {
	type Output = Vector<T>;

	fn sub(self, rhs: Self) -> Self::Output {
		Self::Output {
			x: self.x - rhs.x,
			y: self.y - rhs.y,
		}
	}
}

impl<T: fmt::Display> fmt::Display for Point<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}
