mod api_client;
