mod integration_registry;
