pub mod advection;
pub mod euler_pcm;
