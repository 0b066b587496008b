pub mod starsim_vis2d;
