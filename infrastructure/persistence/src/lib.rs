pub mod db;
mod errors;
pub mod address {
    pub mod entity;
    pub mod repository;
}
pub mod basket {
    pub mod entity;
    pub mod repository;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod supplier {
    pub mod entity;
    pub mod repository;
}
