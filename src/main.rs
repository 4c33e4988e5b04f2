fn main() {
    console_error_panic_hook::set_once();
    glassfx::start_when_ready();
}
