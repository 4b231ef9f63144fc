/*
 * Particle Swarm Animation
 *
 * Swarms of particles drift across the canvas, steer toward the pointer, and
 * draw fading links to nearby members of their own swarm. The control panel
 * tunes pointer sensitivity, particle and swarm density, link distance and
 * particle speed while the animation runs.
 *
 * Set RUST_LOG (for example `RUST_LOG=swarmlink=debug`) to see rebuild and
 * parameter logs.
 */

use swarmlink::app::{model, update};

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}
