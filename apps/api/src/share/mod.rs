// Stateless CV sharing: normalize, encode into a URL fragment, decode back.
// Nothing in here touches storage or the network; time comes in through `Clock`.

pub mod clock;
pub mod codec;
pub mod complexity;
pub mod handlers;
pub mod link;
pub mod normalize;
pub mod published;
pub mod view;

pub use clock::{Clock, SystemClock};
