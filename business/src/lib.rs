pub mod application {
    pub mod address {
        pub mod create;
        pub mod get_all;
    }
    pub mod basket {
        pub mod add_item;
        pub mod remove_item;
        pub mod update_quantity;
        pub mod view;
    }
    pub mod order {
        pub mod confirm;
        pub mod create;
        pub mod set_status;
    }
    pub mod supplier {
        pub mod get_orders;
        pub mod toggle_accepts_orders;
        pub mod upload_price_list;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod address {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod remove_item;
            pub mod update_quantity;
            pub mod view;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod price_list;
        pub mod repository;
    }
    pub mod order {
        pub mod confirmation;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod confirm;
            pub mod create;
            pub mod set_status;
        }
    }
    pub mod supplier {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_orders;
            pub mod toggle_accepts_orders;
            pub mod upload_price_list;
        }
    }
}
