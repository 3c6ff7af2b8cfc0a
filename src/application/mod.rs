mod animation;

pub use animation::AnimationDriver;
