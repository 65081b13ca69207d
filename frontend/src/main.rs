use landing_frontend::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
