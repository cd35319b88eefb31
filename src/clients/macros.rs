/// Generate a client method that sends one request variant and awaits its
/// oneshot reply. Parameter names must match the variant's field names.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        #[allow(dead_code)]
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::ClientError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| $crate::error::ClientError::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| $crate::error::ClientError::ActorCommunicationError("Actor dropped".to_string()))
            }
        }
    };
}

pub(crate) use client_method;
