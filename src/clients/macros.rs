/// Generates a client method that sends `$request::$variant` with a oneshot
/// responder and waits for the reply.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, crate::error::DashboardError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| crate::error::DashboardError::ActorCommunicationError("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| crate::error::DashboardError::ActorCommunicationError("Actor dropped".to_string()))
            }
        }
    };
}
