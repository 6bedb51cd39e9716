mod app_router;
mod boot;
mod page;
mod result_page;
mod upload_page;

fn main() {
    console_error_panic_hook::set_once();
    boot::start();
}
