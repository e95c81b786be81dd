pub(crate) mod usecase;

use ctor::ctor;

#[ctor]
fn logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}
