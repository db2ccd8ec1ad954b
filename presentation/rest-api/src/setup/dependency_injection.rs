use std::sync::Arc;

use logger::TracingLogger;
use notifier::{EmailRelayNotifier, LogNotifier};
use persistence::address::repository::AddressRepositoryPostgres;
use persistence::basket::repository::BasketRepositoryPostgres;
use persistence::catalog::repository::{PriceListRepositoryPostgres, ProductRepositoryPostgres};
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::supplier::repository::SupplierRepositoryPostgres;

use business::application::address::create::CreateAddressUseCaseImpl;
use business::application::address::get_all::GetAllAddressesUseCaseImpl;
use business::application::basket::add_item::AddBasketItemUseCaseImpl;
use business::application::basket::remove_item::RemoveBasketItemUseCaseImpl;
use business::application::basket::update_quantity::UpdateBasketItemQuantityUseCaseImpl;
use business::application::basket::view::ViewBasketUseCaseImpl;
use business::application::order::confirm::ConfirmOrderUseCaseImpl;
use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::set_status::SetOrderStatusUseCaseImpl;
use business::application::supplier::get_orders::GetSupplierOrdersUseCaseImpl;
use business::application::supplier::toggle_accepts_orders::ToggleAcceptsOrdersUseCaseImpl;
use business::application::supplier::upload_price_list::UploadPriceListUseCaseImpl;
use business::domain::order::confirmation::CheckoutConfig;
use business::domain::order::services::OrderNotifier;

use crate::api::address::routes::AddressApi;
use crate::api::basket::routes::BasketApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::supplier::routes::SupplierApi;
use crate::config::notifier_config::NotifierConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub basket_api: BasketApi,
    pub order_api: OrderApi,
    pub supplier_api: SupplierApi,
    pub address_api: AddressApi,
}

impl DependencyContainer {
    pub fn new(
        pool: sqlx::PgPool,
        checkout: CheckoutConfig,
        notifier_config: &NotifierConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let basket_repository = Arc::new(BasketRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let price_list_repository = Arc::new(PriceListRepositoryPostgres::new(pool.clone()));
        let supplier_repository = Arc::new(SupplierRepositoryPostgres::new(pool.clone()));
        let address_repository = Arc::new(AddressRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool));

        let notifier: Arc<dyn OrderNotifier> = match &notifier_config.relay_url {
            Some(relay_url) => {
                tracing::info!(relay_url = %relay_url, "order notifications go to mail relay");
                Arc::new(EmailRelayNotifier::new(
                    relay_url.clone(),
                    notifier_config.api_key.clone(),
                ))
            }
            None => {
                tracing::warn!("NOTIFIER_RELAY_URL not set, confirmation codes are only logged");
                Arc::new(LogNotifier::new(logger.clone()))
            }
        };

        // Basket use cases
        let view_basket_use_case = Arc::new(ViewBasketUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });
        let add_basket_item_use_case = Arc::new(AddBasketItemUseCaseImpl {
            repository: basket_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateBasketItemQuantityUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });
        let remove_basket_item_use_case = Arc::new(RemoveBasketItemUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            basket_repository,
            address_repository: address_repository.clone(),
            order_repository: order_repository.clone(),
            notifier,
            config: checkout,
            logger: logger.clone(),
        });
        let confirm_order_use_case = Arc::new(ConfirmOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let set_order_status_use_case = Arc::new(SetOrderStatusUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });

        // Supplier use cases
        let toggle_accepts_orders_use_case = Arc::new(ToggleAcceptsOrdersUseCaseImpl {
            repository: supplier_repository.clone(),
            logger: logger.clone(),
        });
        let get_supplier_orders_use_case = Arc::new(GetSupplierOrdersUseCaseImpl {
            supplier_repository: supplier_repository.clone(),
            order_repository,
            logger: logger.clone(),
        });
        let upload_price_list_use_case = Arc::new(UploadPriceListUseCaseImpl {
            supplier_repository,
            price_list_repository,
            logger: logger.clone(),
        });

        // Address use cases
        let create_address_use_case = Arc::new(CreateAddressUseCaseImpl {
            repository: address_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_addresses_use_case = Arc::new(GetAllAddressesUseCaseImpl {
            repository: address_repository,
            logger,
        });

        Self {
            health_api,
            basket_api: BasketApi::new(
                view_basket_use_case,
                add_basket_item_use_case,
                update_quantity_use_case,
                remove_basket_item_use_case,
            ),
            order_api: OrderApi::new(
                create_order_use_case,
                confirm_order_use_case,
                set_order_status_use_case,
            ),
            supplier_api: SupplierApi::new(
                toggle_accepts_orders_use_case,
                get_supplier_orders_use_case,
                upload_price_list_use_case,
            ),
            address_api: AddressApi::new(create_address_use_case, get_all_addresses_use_case),
        }
    }
}
