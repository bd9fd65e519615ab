use leptos::mount::mount_to_body;

use quickpoll_ui::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("widget initialized");
    mount_to_body(App);
}
