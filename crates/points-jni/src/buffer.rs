//! Direct `ByteBuffer` access for the `BBPoint` natives

use crate::error::{BridgeError, BridgeResult};
use jni::objects::JByteBuffer;
use jni::JNIEnv;
use points_core::distance_from_buffers;

/// Borrow the memory behind a direct buffer.
///
/// The slice covers the buffer from its base address to its capacity; the
/// Java-side position and limit are ignored.
pub(crate) fn direct_buffer_bytes<'b>(env: &JNIEnv<'_>, buffer: &'b JByteBuffer<'_>) -> BridgeResult<&'b [u8]> {
    if buffer.is_null() {
        return Err(BridgeError::NotDirectBuffer);
    }

    let address = env
        .get_direct_buffer_address(buffer)
        .map_err(|_| BridgeError::NotDirectBuffer)?;
    if address.is_null() {
        return Err(BridgeError::NotDirectBuffer);
    }
    let capacity = env.get_direct_buffer_capacity(buffer)?;

    // SAFETY: the JVM keeps a direct buffer's memory valid for `capacity`
    // bytes while a reference to the buffer is held, and `buffer` is
    // borrowed for the lifetime of the returned slice.
    Ok(unsafe { std::slice::from_raw_parts(address, capacity) })
}

/// Distance between the points stored at the start of two direct buffers.
pub(crate) fn buffer_distance(env: &JNIEnv<'_>, a: &JByteBuffer<'_>, b: &JByteBuffer<'_>) -> BridgeResult<f64> {
    let a = direct_buffer_bytes(env, a)?;
    let b = direct_buffer_bytes(env, b)?;
    distance_from_buffers(a, b).map_err(|err| {
        tracing::warn!(a_len = a.len(), b_len = b.len(), error = %err, "Rejected undersized point buffer");
        BridgeError::from(err)
    })
}
