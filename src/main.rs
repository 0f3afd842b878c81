mod boot;
mod dom;
mod persisted_store;
mod site_runtime;

fn main() {
    site_runtime::run();
}
