//! [`ImageLoader`] backed by detached `<img>` elements.

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use loaders::preload::{ImageError, ImageLoader};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserImageLoader;

impl ImageLoader for BrowserImageLoader {
    type Handle = HtmlImageElement;

    fn load(
        &self,
        url: &str,
    ) -> LocalBoxFuture<'static, Result<HtmlImageElement, ImageError>> {
        let url = url.to_string();
        async move {
            let image = HtmlImageElement::new()
                .map_err(|_| ImageError::Failed(url.clone()))?;
            let (sender, receiver) = oneshot::channel();
            let listeners = Listeners::attach(&image, sender);
            image.set_src(&url);

            let loaded = receiver.await.unwrap_or(false);
            drop(listeners);
            if loaded {
                Ok(image)
            } else {
                Err(ImageError::Failed(url))
            }
        }
        .boxed_local()
    }
}

/// `onload`/`onerror` handlers of one image. Dropping them detaches both,
/// which is what happens when a load times out.
struct Listeners {
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Listeners {
    fn attach(image: &HtmlImageElement, sender: oneshot::Sender<bool>) -> Self {
        let sender = Rc::new(RefCell::new(Some(sender)));
        let settle = move |loaded: bool| {
            let sender = Rc::clone(&sender);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(sender) = sender.borrow_mut().take() {
                    let _ = sender.send(loaded);
                }
            })
        };
        let onload = settle(true);
        let onerror = settle(false);
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        Self {
            image: image.clone(),
            _onload: onload,
            _onerror: onerror,
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}
