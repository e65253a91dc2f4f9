//! Shared handle to a carousel.
//!
//! Addons and group subscriptions hold clones of the handle. The group callback
//! keeps only a `Weak` reference, so a dropped carousel never keeps its
//! subscription alive, and a re-entrant delivery to a carousel that is already
//! borrowed (the publisher itself) is skipped.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use log::debug;

use crate::carousel::{Carousel, CarouselOptions, Env};
use crate::error::CarouselError;

#[derive(Clone, Debug)]
pub struct CarouselHandle {
    inner: Rc<RefCell<Carousel>>,
}

impl CarouselHandle {
    pub fn new(options: CarouselOptions, env: Env) -> Result<Self, CarouselError> {
        Ok(Self::from_carousel(Carousel::new(options, env)?))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            inner: Rc::new(RefCell::new(carousel)),
        }
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, Carousel> {
        self.inner.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Carousel> {
        self.inner.borrow_mut()
    }

    /// Subscribe to the configured group (if any) and mount the carousel.
    pub fn mount(&self) {
        self.subscribe_group();
        self.inner.borrow_mut().mount();
    }

    pub fn unmount(&self) {
        self.inner.borrow_mut().unmount();
    }

    /// Move the carousel to another sync group, or out of any group with `None`.
    pub fn set_group(&self, group: Option<String>) {
        let group = group.filter(|g| !g.is_empty());
        let mounted = {
            let mut c = self.inner.borrow_mut();
            if c.group == group {
                return;
            }
            c.detach_group();
            debug!("carousel group {:?} -> {:?}", c.group, group);
            c.group = group;
            c.is_mounted()
        };
        if mounted {
            self.subscribe_group();
        }
    }

    fn subscribe_group(&self) {
        let (group, bus) = {
            let c = self.inner.borrow();
            match (&c.group, c.subscription) {
                (Some(group), None) => (group.clone(), c.env.bus.clone()),
                _ => return,
            }
        };
        let weak: Weak<RefCell<Carousel>> = Rc::downgrade(&self.inner);
        let id = bus.subscribe(&group, move |index| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Ok(mut c) = inner.try_borrow_mut() else {
                return;
            };
            c.slide_to(index, false);
        });
        self.inner.borrow_mut().subscription = Some(id);
    }

    /// Whether both handles point at the same carousel.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
