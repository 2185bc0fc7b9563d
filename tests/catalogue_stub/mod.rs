use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

static PAGE_1: &str = r#"<!doctype html>
<html>
  <head><title>Books to Scrape - Page 1</title></head>
  <body>
    <ol class="row">
      <li>
        <article class="product_pod">
          <h3><a href="a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in the ...</a></h3>
          <p class="price_color">£51.77</p>
          <p class="instock availability">
            <i class="icon-ok"></i>
            In stock
          </p>
        </article>
      </li>
      <li>
        <article class="product_pod">
          <h3><a href="tipping-the-velvet_999/index.html" title="Tipping the Velvet">Tipping the ...</a></h3>
          <p class="price_color">£53.74</p>
          <p class="instock availability">
            <i class="icon-ok"></i>
            In stock
          </p>
        </article>
      </li>
    </ol>
  </body>
</html>
"#;

static PAGE_2: &str = r#"<!doctype html>
<html>
  <head><title>Books to Scrape - Page 2</title></head>
  <body>
    <ol class="row">
      <li>
        <article class="product_pod">
          <h3><a href="soumission_998/index.html" title="Soumission">Soumission</a></h3>
          <p class="price_color">£50.10</p>
          <p class="instock availability">
            <i class="icon-ok"></i>
            In stock
          </p>
        </article>
      </li>
    </ol>
  </body>
</html>
"#;

static PAGE_4_BROKEN: &str = r#"<!doctype html>
<html>
  <head><title>Books to Scrape - Page 4</title></head>
  <body>
    <ol class="row">
      <li>
        <article class="product_pod">
          <h3><a href="sharp-objects_997/index.html" title="Sharp Objects">Sharp Objects</a></h3>
          <p class="instock availability">
            <i class="icon-ok"></i>
            In stock
          </p>
        </article>
      </li>
    </ol>
  </body>
</html>
"#;

static PAGE_5_EMPTY: &str = r#"<!doctype html>
<html>
  <head><title>Books to Scrape - Page 5</title></head>
  <body>
    <p>The catalogue is being restocked. Check back soon.</p>
  </body>
</html>
"#;

/// In-memory catalogue shaped like books.toscrape.com: pages 1 and 2 list
/// books, page 3 is missing, page 4 has an entry without a price, page 5
/// lists nothing.
pub struct CatalogueStub {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl CatalogueStub {
    pub fn spawn() -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start catalogue stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let log = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let path = request.url().to_string();
                log.lock().expect("request log").push(path.clone());

                let (status, body) = match path.as_str() {
                    "/catalogue/page-1.html" => (200, PAGE_1),
                    "/catalogue/page-2.html" => (200, PAGE_2),
                    "/catalogue/page-4.html" => (200, PAGE_4_BROKEN),
                    "/catalogue/page-5.html" => (200, PAGE_5_EMPTY),
                    _ => (404, "not found"),
                };

                let mut response = tiny_http::Response::from_string(body).with_status_code(status);
                if status == 200 {
                    let header = tiny_http::Header::from_bytes(
                        &b"Content-Type"[..],
                        &b"text/html; charset=utf-8"[..],
                    )
                    .expect("build header");
                    response = response.with_header(header);
                }

                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Base url for a scrape request, trailing slash included.
    pub fn catalogue_url(&self) -> String {
        format!("{}/catalogue/", self.base_url)
    }

    /// Paths requested so far, in arrival order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

impl Drop for CatalogueStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
