// shop-client/src/http.rs
// HTTP 客户端 - 网络通信

use reqwest::Client;
use serde::de::DeserializeOwned;

use shared::models::{Order, OrderCreate, Product};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// 服务端返回的错误响应格式
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    message: String,
}

/// Query parameters for the product listing endpoint
///
/// `None` fields are omitted from the query string, which the server
/// treats the same as "no filter".
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct ShopClient {
    client: Client,
    base_url: String,
}

impl ShopClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_url)
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // 尝试解析为 {"message": ...} 错误体，否则用原始文本
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    // ========== Products ==========

    /// GET /api/products - 按过滤条件获取商品列表
    pub async fn products(&self, filter: &ProductFilter) -> ClientResult<Vec<Product>> {
        let url = format!("{}/api/products", self.base_url);
        let response = self.client.get(&url).query(filter).send().await?;
        self.handle_response(response).await
    }

    /// GET /api/products/:id - 获取单个商品
    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// POST /api/products - 创建商品 (管理面板)
    ///
    /// 载荷按管理表单原样提交，数字字段可以是字符串，由服务端解析。
    pub async fn create_product<B: serde::Serialize + Sync>(
        &self,
        payload: &B,
    ) -> ClientResult<Product> {
        let url = format!("{}/api/products", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;
        self.handle_response(response).await
    }

    /// PUT /api/products/:id - 更新商品 (管理面板)
    pub async fn update_product<B: serde::Serialize + Sync>(
        &self,
        id: &str,
        payload: &B,
    ) -> ClientResult<Product> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        let response = self.client.put(&url).json(payload).send().await?;
        self.handle_response(response).await
    }

    /// DELETE /api/products/:id - 删除商品 (管理面板)
    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;
        // 响应体只有一条确认消息，丢弃即可
        self.handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    // ========== Categories ==========

    /// GET /api/categories - 获取所有分类
    pub async fn categories(&self) -> ClientResult<Vec<String>> {
        let url = format!("{}/api/categories", self.base_url);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    // ========== Orders ==========

    /// POST /api/orders - 提交订单 (结账)
    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<Order> {
        let url = format!("{}/api/orders", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;
        self.handle_response(response).await
    }

    /// GET /api/orders - 获取所有订单 (管理面板)
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        let url = format!("{}/api/orders", self.base_url);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }
}
